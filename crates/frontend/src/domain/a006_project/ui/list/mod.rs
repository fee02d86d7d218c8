use crate::domain::a006_project::api::fetch_projects;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabRoute;
use crate::shared::components::{PaginationControls, StatCard, StatusBadge};
use crate::shared::list_utils::{enum_options, get_sort_indicator, FacetSelect, SearchInput, SortableHeaderCell};
use contracts::domain::a006_project::{Project, ProjectFacet, ProjectSortKey, ProjectStatus};
use contracts::shared::format::{format_date, format_inr, format_inr_compact};
use contracts::shared::list_view::{Aggregator, ListViewModel, Scope};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn is_in_progress(project: &Project) -> bool {
    project.status == ProjectStatus::InProgress
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let model = RwSignal::new(ListViewModel::<Project>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_projects().await {
                Ok(records) => {
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load projects: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let page = Memo::new(move |_| model.with(|m| m.page_view()));
    let loaded = move |text: String| (!loading.get()).then_some(text);

    let total = Signal::derive(move || {
        let shown = model.with(|m| m.aggregate(&Aggregator::Count, Scope::Filtered).as_count());
        let all = model.with(|m| m.aggregate(&Aggregator::Count, Scope::All).as_count());
        loaded(format!("{} of {}", shown, all))
    });
    let in_progress = Signal::derive(move || {
        let n = model.with(|m| m.aggregate(&Aggregator::CountWhere(is_in_progress), Scope::Filtered));
        loaded(n.as_count().to_string())
    });
    let budget = Signal::derive(move || {
        let sum = model.with(|m| m.aggregate(&Aggregator::Sum(|p: &Project| p.budget as f64), Scope::Filtered));
        loaded(format_inr_compact(sum.as_f64().unwrap_or(0.0)))
    });

    let sort_header = move |label: &'static str, key: ProjectSortKey, align_right: bool| {
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
                    <h1 class="header__title">"Projects"</h1>
                </div>
                <div class="header__actions">
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
                <StatCard label="Projects" value=total />
                <StatCard label="In progress" value=in_progress modifier="stat-card--primary" />
                <StatCard label="Total budget" value=budget />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || model.with(|m| m.query().to_string()))
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by code, name or customer"
                />
                <FacetSelect
                    label="Status"
                    value=Signal::derive(move || model.with(|m| m.selection(ProjectFacet::Status).as_param().to_string()))
                    options=Signal::derive(|| enum_options(ProjectStatus::all(), ProjectStatus::as_str, ProjectStatus::display_name))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(ProjectFacet::Status, &v)))
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
                            <th class="table__header-cell">"Code"</th>
                            {sort_header("Name", ProjectSortKey::Name, false)}
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Location"</th>
                            {sort_header("Start", ProjectSortKey::StartDate, false)}
                            <th class="table__header-cell table__header-cell--right">"Budget"</th>
                            {sort_header("Progress", ProjectSortKey::Progress, true)}
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page.get().items;
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="9">
                                            "No projects match the current filters"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|project| {
                                let specs_key = TabRoute::ShutterSpecs(project.id.clone()).key();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{project.project_code}</td>
                                        <td class="table__cell">{project.name}</td>
                                        <td class="table__cell">{project.customer_name}</td>
                                        <td class="table__cell">{project.location}</td>
                                        <td class="table__cell">{format_date(project.start_date)}</td>
                                        <td class="table__cell table__cell--right">{format_inr(project.budget)}</td>
                                        <td class="table__cell table__cell--right">
                                            <div class="progress">
                                                <div class="progress__bar" style:width=format!("{}%", project.progress)></div>
                                            </div>
                                            {format!("{}%", project.progress)}
                                        </td>
                                        <td class="table__cell">
                                            <StatusBadge variant=project.status.badge_variant() label=project.status.display_name() />
                                        </td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--small button--secondary"
                                                on:click=move |_| ctx.navigate(&specs_key)
                                            >
                                                "Shutter specs"
                                            </button>
                                        </td>
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
