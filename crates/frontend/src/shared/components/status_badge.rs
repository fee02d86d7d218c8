use contracts::domain::common::BadgeVariant;
use leptos::prelude::*;

/// Бейдж статуса записи: цвет из `badge_variant()` доменного enum-а
#[component]
pub fn StatusBadge(variant: BadgeVariant, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("badge {}", variant.css_class())>
            {label}
        </span>
    }
}
