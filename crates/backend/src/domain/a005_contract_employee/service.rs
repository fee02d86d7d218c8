use contracts::domain::a005_contract_employee::{
    ContractEmployee, ContractEmployeeFacet, ContractEmployeeStats,
};
use contracts::domain::common::ListResponse;
use contracts::shared::format::format_date;

use super::repository;
use crate::shared::config::list_config;
use crate::shared::export::{to_csv, CsvRow};
use crate::shared::list_query::{filter_all, run_query, ListQuery, ListQueryError};

pub async fn list_all() -> anyhow::Result<Vec<ContractEmployee>> {
    Ok(repository::list_all().to_vec())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<ContractEmployee>> {
    Ok(repository::get_by_id(id))
}

pub fn query(
    query: &ListQuery,
) -> Result<ListResponse<ContractEmployee, ContractEmployeeStats>, ListQueryError> {
    run_query(
        repository::list_all(),
        query,
        ContractEmployeeFacet::all(),
        ContractEmployeeStats::compute,
        list_config(),
    )
}

pub fn export_csv(query: &ListQuery) -> Result<String, ListQueryError> {
    to_csv(&filter_all(repository::list_all(), query)?)
}

impl CsvRow for ContractEmployee {
    fn headers() -> &'static [&'static str] {
        &[
            "Code",
            "Name",
            "Department",
            "Designation",
            "Agency",
            "Contract type",
            "Status",
            "Daily rate",
            "Start",
            "End",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.employee_code.clone(),
            self.name.clone(),
            self.department.clone(),
            self.designation.clone(),
            self.contractor_agency.clone(),
            self.contract_type.display_name().to_string(),
            self.status.display_name().to_string(),
            self.daily_rate.to_string(),
            format_date(self.start_date),
            self.end_date.map(format_date).unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn list_query(pairs: &[(&str, &str)]) -> ListQuery {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListQuery::from_map(map).unwrap()
    }

    #[test]
    fn test_default_sort_and_stats() {
        let response = query(&ListQuery::default()).unwrap();
        assert_eq!(response.items[0].name, "Imran Shaikh");
        assert_eq!(response.stats_all.total, 7);
        assert_eq!(response.stats_all.active, 4);
        assert_eq!(response.stats_all.active_daily_cost, 6_300.0);
    }

    #[test]
    fn test_facets_and_search() {
        let response = query(&list_query(&[
            ("q", "skyline"),
            ("department", "Production"),
            ("contract_type", "all"),
        ]))
        .unwrap();
        assert_eq!(response.total_items, 2);

        let none = query(&list_query(&[("status", "on-leave")])).unwrap();
        assert_eq!(none.total_items, 0);
        assert_eq!(none.stats_filtered.avg_daily_rate, None);
    }

    #[test]
    fn test_fixed_term_has_end_date() {
        let all = repository::seed();
        assert!(all[0].end_date.is_some());
        assert!(all[1].end_date.is_none());
    }
}
