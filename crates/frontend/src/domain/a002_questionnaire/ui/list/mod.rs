use crate::domain::a002_questionnaire::api::{fetch_questionnaires, EXPORT_PATH};
use super::create::{QuestionnaireCreateForm, CREATE_MODAL_ID};
use crate::layout::modal_service::{Modal, ModalService};
use crate::shared::api_utils::open_export;
use crate::shared::components::{PaginationControls, StatCard, StatusBadge};
use crate::shared::list_utils::{
    enum_options, get_sort_indicator, FacetSelect, SearchInput, SortableHeaderCell,
};
use contracts::domain::a002_questionnaire::{
    Questionnaire, QuestionnaireCategory, QuestionnaireFacet, QuestionnaireSortKey,
    QuestionnaireStats, QuestionnaireStatus,
};
use contracts::shared::format::{format_date, format_mean, format_percent};
use contracts::shared::list_view::ListViewModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn percent(value: f64) -> String {
    format_percent(value, 1)
}

#[component]
#[allow(non_snake_case)]
pub fn QuestionnaireList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let model = RwSignal::new(ListViewModel::<Questionnaire>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_questionnaires().await {
                Ok(records) => {
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load questionnaires: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let page = Memo::new(move |_| model.with(|m| m.page_view()));
    let stats = Memo::new(move |_| model.with(|m| QuestionnaireStats::compute(&m.filtered())));
    let loaded = move |text: String| (!loading.get()).then_some(text);

    let facet_value = move |facet: QuestionnaireFacet| {
        Signal::derive(move || model.with(|m| m.selection(facet).as_param().to_string()))
    };
    let set_facet = move |facet: QuestionnaireFacet| {
        Callback::new(move |v: String| model.update(|m| m.set_facet(facet, &v)))
    };

    let sort_header = move |label: &'static str, key: QuestionnaireSortKey, align_right: bool| {
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
                    <h1 class="header__title">"Questionnaires"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| modal.show(CREATE_MODAL_ID)>
                        "+ New questionnaire"
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
                    label="Questionnaires"
                    value=Signal::derive(move || loaded(stats.get().total.to_string()))
                    subtitle=Signal::derive(move || Some(format!("{} active", stats.get().active)))
                />
                <StatCard
                    label="Avg completion rate"
                    value=Signal::derive(move || loaded(format_mean(stats.get().avg_completion_rate, percent)))
                />
                <StatCard
                    label="Total responses"
                    value=Signal::derive(move || loaded(format!("{:.0}", stats.get().total_usage)))
                />
                <StatCard
                    label="Qualified leads"
                    value=Signal::derive(move || loaded(format!("{:.0}", stats.get().qualified_leads)))
                    modifier="stat-card--success"
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || model.with(|m| m.query().to_string()))
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by code, name or category"
                />
                <FacetSelect
                    label="Status"
                    value=facet_value(QuestionnaireFacet::Status)
                    options=Signal::derive(|| enum_options(
                        QuestionnaireStatus::all(),
                        QuestionnaireStatus::as_str,
                        QuestionnaireStatus::display_name,
                    ))
                    on_change=set_facet(QuestionnaireFacet::Status)
                />
                <FacetSelect
                    label="Category"
                    value=facet_value(QuestionnaireFacet::Category)
                    options=Signal::derive(|| enum_options(
                        QuestionnaireCategory::all(),
                        QuestionnaireCategory::as_str,
                        QuestionnaireCategory::display_name,
                    ))
                    on_change=set_facet(QuestionnaireFacet::Category)
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
                            {sort_header("Name", QuestionnaireSortKey::Name, false)}
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Segment"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Questions"</th>
                            {sort_header("Completion", QuestionnaireSortKey::CompletionRate, true)}
                            {sort_header("Usage", QuestionnaireSortKey::UsageCount, true)}
                            <th class="table__header-cell">"Leads"</th>
                            {sort_header("Modified", QuestionnaireSortKey::LastModified, false)}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page.get().items;
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="10">
                                            "No questionnaires match the current filters"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|q| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{q.code}</td>
                                    <td class="table__cell">
                                        <div>{q.name}</div>
                                        <div class="table__cell-hint">{q.description}</div>
                                    </td>
                                    <td class="table__cell">{q.category.display_name()}</td>
                                    <td class="table__cell">{q.target_segment}</td>
                                    <td class="table__cell">
                                        <StatusBadge variant=q.status.badge_variant() label=q.status.display_name() />
                                    </td>
                                    <td class="table__cell">
                                        {format!("{} · ~{} min", q.questions, q.avg_completion_time)}
                                    </td>
                                    <td class="table__cell table__cell--right">{percent(q.completion_rate)}</td>
                                    <td class="table__cell table__cell--right">{q.usage_count}</td>
                                    <td class="table__cell table__cell--right">{q.qualified_leads}</td>
                                    <td class="table__cell">{format_date(q.last_modified)}</td>
                                </tr>
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

            <Modal id=CREATE_MODAL_ID title="New questionnaire">
                <QuestionnaireCreateForm />
            </Modal>
        </div>
    }
}
