use crate::domain::a005_contract_employee::api::{fetch_contract_employees, EXPORT_PATH};
use crate::shared::api_utils::open_export;
use crate::shared::components::{PaginationControls, StatCard, StatusBadge};
use crate::shared::list_utils::{
    enum_options, get_sort_indicator, text_options, FacetSelect, SearchInput, SortableHeaderCell,
};
use contracts::domain::a005_contract_employee::{
    ContractEmployee, ContractEmployeeFacet, ContractEmployeeSortKey, ContractEmployeeStats,
    ContractType, EmploymentStatus,
};
use contracts::shared::format::{format_date, format_inr, format_inr_compact, format_mean};
use contracts::shared::list_view::ListViewModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// `12.01.2025 – 30.06.2025`, открытый контракт без даты окончания
fn contract_period(employee: &ContractEmployee) -> String {
    match employee.end_date {
        Some(end) => format!("{} – {}", format_date(employee.start_date), format_date(end)),
        None => format!("{} – open", format_date(employee.start_date)),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ContractEmployeeList() -> impl IntoView {
    let model = RwSignal::new(ListViewModel::<ContractEmployee>::new(Vec::new()));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_contract_employees().await {
                Ok(records) => {
                    log::info!("loaded {} contract employees", records.len());
                    model.set(ListViewModel::new(records));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load contract employees: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let page = Memo::new(move |_| model.with(|m| m.page_view()));
    let stats = Memo::new(move |_| model.with(|m| ContractEmployeeStats::compute(&m.filtered())));
    let loaded = move |text: String| (!loading.get()).then_some(text);

    let sort_header = move |label: &'static str, key: ContractEmployeeSortKey, align_right: bool| {
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
                    <h1 class="header__title">"Contract employees"</h1>
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
                    label="Employees"
                    value=Signal::derive(move || loaded(stats.get().total.to_string()))
                    subtitle=Signal::derive(move || Some(format!("{} active", stats.get().active)))
                />
                <StatCard
                    label="Average daily rate"
                    value=Signal::derive(move || loaded(format_mean(stats.get().avg_daily_rate, format_inr_compact)))
                />
                <StatCard
                    label="Active daily cost"
                    value=Signal::derive(move || loaded(format_inr_compact(stats.get().active_daily_cost)))
                    modifier="stat-card--success"
                />
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=Signal::derive(move || model.with(|m| m.query().to_string()))
                    on_change=Callback::new(move |q: String| model.update(|m| m.set_query(q)))
                    placeholder="Search by name, code or agency"
                />
                <FacetSelect
                    label="Department"
                    value=Signal::derive(move || model.with(|m| m.selection(ContractEmployeeFacet::Department).as_param().to_string()))
                    options=Signal::derive(move || model.with(|m| text_options(m.facet_options(ContractEmployeeFacet::Department))))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(ContractEmployeeFacet::Department, &v)))
                />
                <FacetSelect
                    label="Status"
                    value=Signal::derive(move || model.with(|m| m.selection(ContractEmployeeFacet::Status).as_param().to_string()))
                    options=Signal::derive(|| enum_options(EmploymentStatus::all(), EmploymentStatus::as_str, EmploymentStatus::display_name))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(ContractEmployeeFacet::Status, &v)))
                />
                <FacetSelect
                    label="Contract type"
                    value=Signal::derive(move || model.with(|m| m.selection(ContractEmployeeFacet::ContractType).as_param().to_string()))
                    options=Signal::derive(|| enum_options(ContractType::all(), ContractType::as_str, ContractType::display_name))
                    on_change=Callback::new(move |v: String| model.update(|m| m.set_facet(ContractEmployeeFacet::ContractType, &v)))
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
                            {sort_header("Name", ContractEmployeeSortKey::Name, false)}
                            <th class="table__header-cell">"Department"</th>
                            <th class="table__header-cell">"Agency"</th>
                            <th class="table__header-cell">"Contract"</th>
                            {sort_header("Daily rate", ContractEmployeeSortKey::DailyRate, true)}
                            {sort_header("Period", ContractEmployeeSortKey::StartDate, false)}
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page.get().items;
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="8">
                                            "No employees match the current filters"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|employee| {
                                let period = contract_period(&employee);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{employee.employee_code}</td>
                                        <td class="table__cell">
                                            <div>{employee.name}</div>
                                            <div class="table__cell-hint">{employee.designation}</div>
                                        </td>
                                        <td class="table__cell">{employee.department}</td>
                                        <td class="table__cell">{employee.contractor_agency}</td>
                                        <td class="table__cell">{employee.contract_type.display_name()}</td>
                                        <td class="table__cell table__cell--right">{format_inr(employee.daily_rate)}</td>
                                        <td class="table__cell">{period}</td>
                                        <td class="table__cell">
                                            <StatusBadge variant=employee.status.badge_variant() label=employee.status.display_name() />
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(end_date: Option<NaiveDate>) -> ContractEmployee {
        ContractEmployee {
            id: "ce-1".into(),
            employee_code: "CE-001".into(),
            name: "Ravi Kumar".into(),
            department: "Installation".into(),
            designation: "Fitter".into(),
            contractor_agency: "Skyline Staffing".into(),
            contract_type: ContractType::FixedTerm,
            status: EmploymentStatus::Active,
            daily_rate: 1_800,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            end_date,
            location: "Pune".into(),
        }
    }

    #[test]
    fn test_contract_period() {
        let end = NaiveDate::from_ymd_opt(2025, 6, 30);
        assert_eq!(contract_period(&employee(end)), "12.01.2025 – 30.06.2025");
        assert_eq!(contract_period(&employee(None)), "12.01.2025 – open");
    }
}
