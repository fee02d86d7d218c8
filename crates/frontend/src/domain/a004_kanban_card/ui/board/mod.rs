use crate::domain::a004_kanban_card::api::fetch_cards;
use crate::shared::components::{StatCard, StatusBadge};
use crate::shared::list_utils::{enum_options, text_options, FacetSelect, SearchInput};
use contracts::domain::a004_kanban_card::{
    CardPriority, KanbanCard, KanbanCardFacet, KanbanCardSortKey, KanbanColumn, KanbanStats,
};
use contracts::shared::format::format_date;
use contracts::shared::list_view::{Column, ListViewModel, SortSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Значения select-а сортировки карточек внутри колонок
const SORT_OPTIONS: [(&str, &str); 4] = [
    ("", "Board order"),
    ("priority", "Priority"),
    ("due_date", "Due date"),
    ("story_points", "Story points"),
];

fn sort_from_select(value: &str) -> Option<SortSpec<KanbanCardSortKey>> {
    match value.parse::<KanbanCardSortKey>() {
        // самые срочные и крупные сверху
        Ok(key @ (KanbanCardSortKey::Priority | KanbanCardSortKey::StoryPoints)) => Some(SortSpec::desc(key)),
        Ok(key) => Some(SortSpec::asc(key)),
        Err(_) => None,
    }
}

#[component]
fn KanbanCardView(card: KanbanCard) -> impl IntoView {
    let critical = card.is_critical();
    view! {
        <div class="kanban-card" class:kanban-card--critical=critical>
            <div class="kanban-card__header">
                <span class="kanban-card__title">{card.title}</span>
                <StatusBadge variant=card.priority.badge_variant() label=card.priority.display_name() />
            </div>
            <div class="kanban-card__description">{card.description}</div>
            <div class="kanban-card__tags">
                {card.tags.into_iter().map(|tag| view! { <span class="kanban-card__tag">{tag}</span> }).collect_view()}
            </div>
            <div class="kanban-card__footer">
                <span>{card.assignee}</span>
                <span>{format!("{} pts", card.story_points)}</span>
                {card.due_date.map(|d| view! { <span>{format!("Due {}", format_date(d))}</span> })}
            </div>
        </div>
    }
}

#[component]
fn KanbanColumnView(column: Column<KanbanColumn, KanbanCard>) -> impl IntoView {
    let count = column.len();
    let title = column.bucket.display_name();
    view! {
        <div class="kanban-column">
            <div class="kanban-column__header">
                <span class="kanban-column__title">{title}</span>
                <span class="kanban-column__count">{count}</span>
            </div>
            <div class="kanban-column__body">
                {if column.items.is_empty() {
                    view! { <div class="kanban-column__empty">"No cards"</div> }.into_any()
                } else {
                    column.items.into_iter()
                        .map(|card| view! { <KanbanCardView card=card /> })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn KanbanBoardPage() -> impl IntoView {
    let model = RwSignal::new(ListViewModel::<KanbanCard>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_cards().await {
                Ok(records) => {
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load kanban cards: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let columns = Memo::new(move |_| model.with(|m| m.board(|c| c.column, KanbanColumn::all())));
    let stats = Memo::new(move |_| {
        model.with(|m| KanbanStats::compute(&m.filtered())).unwrap_or_default()
    });
    let loaded = move |text: String| (!loading.get()).then_some(text);

    let sort_value = Signal::derive(move || {
        model.with(|m| m.sort().map(|s| s.key.as_str().to_string()).unwrap_or_default())
    });

    fetch();

    view! {
        <div class="page page--wide">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Task board"</h1>
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
                <StatCard label="Cards" value=Signal::derive(move || loaded(stats.get().total.to_string())) />
                <StatCard
                    label="Story points"
                    value=Signal::derive(move || loaded(format!("{:.0}", stats.get().story_points)))
                />
                <StatCard
                    label="Critical"
                    value=Signal::derive(move || loaded(stats.get().critical.to_string()))
                    modifier="stat-card--error"
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || model.with(|m| m.query().to_string()))
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by title, assignee or tag"
                />
                <FacetSelect
                    label="Priority"
                    value=Signal::derive(move || model.with(|m| m.selection(KanbanCardFacet::Priority).as_param().to_string()))
                    options=Signal::derive(|| enum_options(CardPriority::all(), CardPriority::as_str, CardPriority::display_name))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(KanbanCardFacet::Priority, &v)))
                />
                <FacetSelect
                    label="Assignee"
                    value=Signal::derive(move || model.with(|m| m.selection(KanbanCardFacet::Assignee).as_param().to_string()))
                    options=Signal::derive(move || model.with(|m| text_options(m.facet_options(KanbanCardFacet::Assignee))))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(KanbanCardFacet::Assignee, &v)))
                />
                <label class="facet-select">
                    <span class="facet-select__label">"Sort"</span>
                    <select
                        class="facet-select__input"
                        prop:value=move || sort_value.get()
                        on:change=move |ev| {
                            let sort = sort_from_select(&event_target_value(&ev));
                            model.update(|m| m.set_sort(sort));
                        }
                    >
                        {SORT_OPTIONS.iter().map(|&(value, label)| view! {
                            <option value=value>{label}</option>
                        }).collect_view()}
                    </select>
                </label>
                <Show when=move || model.with(|m| m.has_active_filters())>
                    <button class="button button--ghost" on:click=move |_| model.update(|m| m.reset_filters())>
                        "Reset filters"
                    </button>
                </Show>
            </div>

            {move || match columns.get() {
                Ok(columns) => view! {
                    <div class="kanban-board">
                        {columns.into_iter()
                            .map(|column| view! { <KanbanColumnView column=column /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                Err(e) => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e.to_string()}</span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_from_select() {
        assert_eq!(sort_from_select(""), None);
        assert_eq!(
            sort_from_select("priority"),
            Some(SortSpec::desc(KanbanCardSortKey::Priority))
        );
        assert_eq!(
            sort_from_select("due_date"),
            Some(SortSpec::asc(KanbanCardSortKey::DueDate))
        );
    }

    #[test]
    fn test_sort_options_parse() {
        for (value, _) in SORT_OPTIONS.iter().skip(1) {
            assert!(sort_from_select(value).is_some(), "{}", value);
        }
    }
}
