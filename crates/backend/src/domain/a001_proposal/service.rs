use contracts::domain::a001_proposal::{Proposal, ProposalDraft, ProposalFacet, ProposalStats};
use contracts::domain::common::ListResponse;
use contracts::shared::format::format_date;
use contracts::shared::metadata::{validate, ValidationErrors};

use super::repository;
use crate::shared::config::list_config;
use crate::shared::export::{to_csv, CsvRow};
use crate::shared::list_query::{filter_all, run_query, ListQuery, ListQueryError};

/// Получение списка всех предложений
pub async fn list_all() -> anyhow::Result<Vec<Proposal>> {
    Ok(repository::list_all().to_vec())
}

/// Получение предложения по ID
pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Proposal>> {
    Ok(repository::get_by_id(id))
}

pub fn query(query: &ListQuery) -> Result<ListResponse<Proposal, ProposalStats>, ListQueryError> {
    run_query(
        repository::list_all(),
        query,
        ProposalFacet::all(),
        ProposalStats::compute,
        list_config(),
    )
}

pub fn export_csv(query: &ListQuery) -> Result<String, ListQueryError> {
    to_csv(&filter_all(repository::list_all(), query)?)
}

/// Проверка черновика; ничего не сохраняется
pub fn validate_draft(draft: &ProposalDraft) -> ValidationErrors {
    validate(draft)
}

impl CsvRow for Proposal {
    fn headers() -> &'static [&'static str] {
        &["Number", "Title", "Customer", "Status", "Total value", "Valid until", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.proposal_number.clone(),
            self.title.clone(),
            self.customer_name.clone(),
            self.status.display_name().to_string(),
            self.total_value.to_string(),
            format_date(self.valid_until),
            format_date(self.created_date),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_get_by_id() {
        let found = get_by_id("prop-001").await.unwrap();
        assert_eq!(found.map(|p| p.proposal_number), Some("PROP-2025-001".to_string()));
        assert!(get_by_id("prop-999").await.unwrap().is_none());
    }

    #[test]
    fn test_query_default_sort_newest_first() {
        let response = query(&ListQuery::default()).unwrap();
        assert_eq!(response.items[0].id, "prop-008");
        assert_eq!(response.total_items, 8);
        assert_eq!(response.stats_all.signed, 2);
    }

    #[test]
    fn test_export_filtered() {
        let mut map = HashMap::new();
        map.insert("status".to_string(), "signed".to_string());
        let csv = export_csv(&ListQuery::from_map(map).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Number,Title"));
        assert!(csv.contains("PROP-2025-001"));
        assert!(csv.contains("PROP-2025-005"));
    }

    #[test]
    fn test_validate_draft() {
        let draft = ProposalDraft::default();
        let errors = validate_draft(&draft);
        assert!(errors.get("title").is_some());
        assert!(errors.get("notes").is_none());
    }
}
