use leptos::prelude::*;

/// KPI-карточка над списком.
///
/// Значение уже отформатировано (`format_inr_compact`, `format_percent`, ...);
/// `None` означает, что данные ещё загружаются.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// `stat-card--success`, `stat-card--warning`, ...
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let class = if modifier.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {}", modifier)
    };

    view! {
        <div class=class>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
