use contracts::domain::a003_cost_breakdown::{CostBreakdown, CostBreakdownFacet, CostBreakdownStats};
use contracts::domain::common::ListResponse;
use contracts::shared::format::format_date;

use super::repository;
use crate::shared::config::list_config;
use crate::shared::export::{to_csv, CsvRow};
use crate::shared::list_query::{filter_all, run_query, ListQuery, ListQueryError};

pub async fn list_all() -> anyhow::Result<Vec<CostBreakdown>> {
    Ok(repository::list_all().to_vec())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<CostBreakdown>> {
    Ok(repository::get_by_id(id))
}

pub fn query(
    query: &ListQuery,
) -> Result<ListResponse<CostBreakdown, CostBreakdownStats>, ListQueryError> {
    run_query(
        repository::list_all(),
        query,
        CostBreakdownFacet::all(),
        CostBreakdownStats::compute,
        list_config(),
    )
}

pub fn export_csv(query: &ListQuery) -> Result<String, ListQueryError> {
    to_csv(&filter_all(repository::list_all(), query)?)
}

impl CsvRow for CostBreakdown {
    fn headers() -> &'static [&'static str] {
        &["Project", "Category", "Budgeted", "Actual", "Committed", "Variance", "Status", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.project_name.clone(),
            self.category.clone(),
            self.budgeted_cost.to_string(),
            self.actual_cost.to_string(),
            self.committed_cost.to_string(),
            self.variance().to_string(),
            self.status.display_name().to_string(),
            format_date(self.last_updated),
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
    fn test_project_facet() {
        let response = query(&list_query(&[("project", "Lodha Tower Kitchens")])).unwrap();
        assert_eq!(response.total_items, 3);
        // по умолчанию: факт по убыванию
        assert_eq!(response.items[0].category, "Materials");
        assert_eq!(response.stats_filtered.total_budgeted, 17_600_000.0);
        assert_eq!(response.stats_filtered.over_budget, 1);
    }

    #[test]
    fn test_sort_override() {
        let response = query(&list_query(&[("sort", "variance"), ("dir", "asc")])).unwrap();
        assert_eq!(response.items[0].id, "cb-008");
    }

    #[test]
    fn test_unknown_sort_key_is_bad_request() {
        let err = query(&list_query(&[("sort", "margin")])).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
