/// Универсальные утилиты для списков: поиск с debounce, выбор фасета, сортировка
use contracts::shared::list_view::{SortDirection, SortSpec, ALL};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка перед применением текста поиска
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Компонент поиска с debounce и кнопкой очистки.
///
/// Значение уходит в `on_change` через [`SEARCH_DEBOUNCE_MS`] после последнего
/// нажатия; очистка применяется сразу.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для подсветки активного поиска)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    // Номер последнего ввода: срабатывает только таймер последнего
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    "×"
                </button>
            </Show>
        </div>
    }
}

/// Выбор значения фасета; первая опция `"all"` отключает фильтр
#[component]
pub fn FacetSelect(
    #[prop(into)] label: String,
    /// Выбранное значение (`"all"` если фильтр выключен)
    #[prop(into)]
    value: Signal<String>,
    /// (value, label) - значения берутся из полного набора записей
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="facet-select">
            <span class="facet-select__label">{label}</span>
            <select
                class="facet-select__input"
                class:facet-select__input--active=move || value.get() != ALL
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=ALL>"All"</option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, text)| view! { <option value=val>{text}</option> }
                />
            </select>
        </label>
    }
}

/// Options for a facet over a closed enum: wire value and display name
pub fn enum_options<E: Copy>(all: &[E], wire: fn(&E) -> &'static str, label: fn(&E) -> &'static str) -> Vec<(String, String)> {
    all.iter()
        .map(|e| (wire(e).to_string(), label(e).to_string()))
        .collect()
}

/// Options for a free-text facet (department, assignee, ...)
pub fn text_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator<K: PartialEq>(current: Option<&SortSpec<K>>, key: &K) -> &'static str {
    match current {
        Some(spec) if &spec.key == key => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

/// Заголовок колонки, переключающий сортировку по клику
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Индикатор из [`get_sort_indicator`]
    #[prop(into)]
    indicator: Signal<&'static str>,
    on_sort: Callback<()>,
    #[prop(optional)] align_right: bool,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__sortable-header"
            class:table__header-cell--right=align_right
            on:click=move |_| on_sort.run(())
        >
            {label}
            <span class="table__sort-indicator">{move || indicator.get()}</span>
        </th>
    }
}
