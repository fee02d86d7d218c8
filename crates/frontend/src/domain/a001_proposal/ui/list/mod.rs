use crate::domain::a001_proposal::api::{fetch_proposals, EXPORT_PATH};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::keys::PROPOSAL_NEW;
use crate::layout::tabs::TabRoute;
use crate::shared::api_utils::open_export;
use crate::shared::components::{PaginationControls, StatCard, StatusBadge};
use crate::shared::list_utils::{
    enum_options, get_sort_indicator, FacetSelect, SearchInput, SortableHeaderCell,
};
use contracts::domain::a001_proposal::{
    Proposal, ProposalFacet, ProposalSortKey, ProposalStats, ProposalStatus,
};
use contracts::shared::format::{format_date, format_inr, format_inr_compact, format_mean};
use contracts::shared::list_view::ListViewModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn ProposalList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let model = RwSignal::new(ListViewModel::<Proposal>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_proposals().await {
                Ok(records) => {
                    log::info!("loaded {} proposals", records.len());
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load proposals: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let page = Memo::new(move |_| model.with(|m| m.page_view()));
    let stats_all = Memo::new(move |_| model.with(|m| ProposalStats::compute(m.records())));
    let stats = Memo::new(move |_| model.with(|m| ProposalStats::compute(&m.filtered())));

    let loaded = move |text: String| (!loading.get()).then_some(text);

    let query = Signal::derive(move || model.with(|m| m.query().to_string()));
    let status_value = Signal::derive(move || {
        model.with(|m| m.selection(ProposalFacet::Status).as_param().to_string())
    });
    let status_options = Signal::derive(|| {
        enum_options(ProposalStatus::all(), ProposalStatus::as_str, ProposalStatus::display_name)
    });

    let sort_header = move |label: &'static str, key: ProposalSortKey, align_right: bool| {
        view! {
            <SortableHeaderCell
                label=label
                indicator=Signal::derive(move || model.with(|m| get_sort_indicator(m.sort().as_ref(), &key)))
                on_sort=Callback::new(move |_| model.update(|m| m.toggle_sort(key)))
                align_right=align_right
            />
        }
    };

    let open_view = move |id: String| ctx.navigate(&TabRoute::ProposalView(id).key());
    let open_edit = move |id: String| ctx.navigate(&TabRoute::ProposalEdit(id).key());

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Proposals"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| ctx.navigate(PROPOSAL_NEW)>
                        "+ New proposal"
                    </button>
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
                    label="Proposals"
                    value=Signal::derive(move || loaded(format!("{} of {}", stats.get().total, stats_all.get().total)))
                />
                <StatCard
                    label="Signed"
                    value=Signal::derive(move || loaded(stats.get().signed.to_string()))
                    modifier="stat-card--success"
                />
                <StatCard
                    label="Pipeline value"
                    value=Signal::derive(move || loaded(format_inr_compact(stats.get().total_value)))
                    subtitle=Signal::derive(move || Some(format!("All proposals: {}", format_inr_compact(stats_all.get().total_value))))
                />
                <StatCard
                    label="Average value"
                    value=Signal::derive(move || loaded(format_mean(stats.get().average_value, format_inr_compact)))
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by number, title or customer"
                />
                <FacetSelect
                    label="Status"
                    value=status_value
                    options=status_options
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(ProposalFacet::Status, &v)))
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
                            <th class="table__header-cell">"Number"</th>
                            {sort_header("Title", ProposalSortKey::Title, false)}
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Status"</th>
                            {sort_header("Value", ProposalSortKey::TotalValue, true)}
                            {sort_header("Valid until", ProposalSortKey::ValidUntil, false)}
                            {sort_header("Created", ProposalSortKey::CreatedDate, false)}
                            <th class="table__header-cell">"Views"</th>
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
                                            "No proposals match the current filters"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|p| {
                                let id_for_row = p.id.clone();
                                let id_for_edit = p.id.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_view(id_for_row.clone())>
                                        <td class="table__cell">{p.proposal_number}</td>
                                        <td class="table__cell">{p.title}</td>
                                        <td class="table__cell">{p.customer_name}</td>
                                        <td class="table__cell">
                                            <StatusBadge variant=p.status.badge_variant() label=p.status.display_name() />
                                        </td>
                                        <td class="table__cell table__cell--right">{format_inr(p.total_value)}</td>
                                        <td class="table__cell">{format_date(p.valid_until)}</td>
                                        <td class="table__cell">{format_date(p.created_date)}</td>
                                        <td class="table__cell">{p.views}</td>
                                        <td class="table__cell">
                                            <button
                                                class="button button--small"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    open_edit(id_for_edit.clone());
                                                }
                                            >
                                                "Edit"
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
