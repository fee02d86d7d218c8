use crate::domain::a003_cost_breakdown::api::{fetch_cost_breakdowns, EXPORT_PATH};
use crate::shared::api_utils::open_export;
use crate::shared::components::{PaginationControls, StatCard, StatusBadge};
use crate::shared::list_utils::{
    enum_options, get_sort_indicator, text_options, FacetSelect, SearchInput, SortableHeaderCell,
};
use contracts::domain::a003_cost_breakdown::{
    BudgetStatus, CostBreakdown, CostBreakdownFacet, CostBreakdownSortKey, CostBreakdownStats,
};
use contracts::shared::format::{format_date, format_inr, format_inr_compact, format_percent};
use contracts::shared::list_view::ListViewModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// `+₹1,20,000 (+4.0%)`; перерасход со знаком плюс
fn variance_label(line: &CostBreakdown) -> String {
    let variance = line.variance();
    let sign = if variance > 0 { "+" } else { "" };
    match line.variance_percent() {
        Some(pct) => format!("{}{} ({}{})", sign, format_inr(variance), sign, format_percent(pct, 1)),
        None => format!("{}{}", sign, format_inr(variance)),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CostBreakdownList() -> impl IntoView {
    let model = RwSignal::new(ListViewModel::<CostBreakdown>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_cost_breakdowns().await {
                Ok(records) => {
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load cost breakdown: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let page = Memo::new(move |_| model.with(|m| m.page_view()));
    let stats = Memo::new(move |_| model.with(|m| CostBreakdownStats::compute(&m.filtered())));
    let loaded = move |text: String| (!loading.get()).then_some(text);

    let sort_header = move |label: &'static str, key: CostBreakdownSortKey, align_right: bool| {
        view! {
            <SortableHeaderCell
                label=label
                indicator=Signal::derive(move || model.with(|m| get_sort_indicator(m.sort().as_ref(), &key)))
                on_sort=Callback::new(move |_| model.update(|m| m.toggle_sort(key)))
                align_right=align_right
            />
        }
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Cost breakdown"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| model.with_untracked(|m| open_export(EXPORT_PATH, m.params()))
                    >
                        "Export CSV"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="stat-cards">
                <StatCard
                    label="Budgeted"
                    value=Signal::derive(move || loaded(format_inr_compact(stats.get().total_budgeted)))
                />
                <StatCard
                    label="Actual"
                    value=Signal::derive(move || loaded(format_inr_compact(stats.get().total_actual)))
                />
                <StatCard
                    label="Variance"
                    value=Signal::derive(move || loaded(format_inr_compact(stats.get().variance)))
                    modifier="stat-card--warning"
                />
                <StatCard
                    label="Over budget"
                    value=Signal::derive(move || loaded(stats.get().over_budget.to_string()))
                    modifier="stat-card--error"
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || model.with(|m| m.query().to_string()))
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by project or category"
                />
                <FacetSelect
                    label="Status"
                    value=Signal::derive(move || model.with(|m| m.selection(CostBreakdownFacet::Status).as_param().to_string()))
                    options=Signal::derive(|| enum_options(BudgetStatus::all(), BudgetStatus::as_str, BudgetStatus::display_name))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(CostBreakdownFacet::Status, &v)))
                />
                <FacetSelect
                    label="Project"
                    value=Signal::derive(move || model.with(|m| m.selection(CostBreakdownFacet::Project).as_param().to_string()))
                    options=Signal::derive(move || model.with(|m| text_options(m.facet_options(CostBreakdownFacet::Project))))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(CostBreakdownFacet::Project, &v)))
                />
                <Show when=move || model.with(|m| m.has_active_filters())>
                    <button class="button button--ghost" on:click=move |_| model.update(|m| m.reset_filters())>
                        "Reset filters"
                    </button>
                </Show>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sort_header("Project", CostBreakdownSortKey::ProjectName, false)}
                            <th class="table__header-cell">"Category"</th>
                            {sort_header("Budgeted", CostBreakdownSortKey::BudgetedCost, true)}
                            {sort_header("Actual", CostBreakdownSortKey::ActualCost, true)}
                            <th class="table__header-cell table__header-cell--right">"Committed"</th>
                            {sort_header("Variance", CostBreakdownSortKey::Variance, true)}
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page.get().items;
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">
                                            "No cost lines match the current filters"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|line| {
                                let variance = variance_label(&line);
                                let over_budget = line.is_over_budget();
                                view! {
                                    <tr class="table__row" class:table__row--warning=over_budget>
                                        <td class="table__cell">{line.project_name}</td>
                                        <td class="table__cell">{line.category}</td>
                                        <td class="table__cell table__cell--right">{format_inr(line.budgeted_cost)}</td>
                                        <td class="table__cell table__cell--right">{format_inr(line.actual_cost)}</td>
                                        <td class="table__cell table__cell--right">{format_inr(line.committed_cost)}</td>
                                        <td class="table__cell table__cell--right">{variance}</td>
                                        <td class="table__cell">
                                            <StatusBadge variant=line.status.badge_variant() label=line.status.display_name() />
                                        </td>
                                        <td class="table__cell">{format_date(line.last_updated)}</td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.get().page)
                total_pages=Signal::derive(move || page.get().total_pages)
                total_count=Signal::derive(move || page.get().total_items)
                page_size=Signal::derive(move || page.get().page_size)
                on_page_change=Callback::new(move |p| model.update(|m| m.set_page(p)))
                on_page_size_change=Callback::new(move |s| model.update(|m| m.set_page_size(s)))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn line(budgeted: i64, actual: i64) -> CostBreakdown {
        CostBreakdown {
            id: "cb-1".into(),
            project_id: "prj-001".into(),
            project_name: "Lodha Park".into(),
            category: "Hardware".into(),
            budgeted_cost: budgeted,
            actual_cost: actual,
            committed_cost: 0,
            status: BudgetStatus::OverBudget,
            last_updated: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        }
    }

    #[test]
    fn test_variance_label() {
        assert_eq!(variance_label(&line(100_000, 104_000)), "+₹4,000 (+4.0%)");
        assert_eq!(variance_label(&line(100_000, 90_000)), "-₹10,000 (-10.0%)");
        assert_eq!(variance_label(&line(0, 5_000)), "+₹5,000");
    }
}
