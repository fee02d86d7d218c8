use contracts::domain::a002_questionnaire::{
    Questionnaire, QuestionnaireCategory, QuestionnaireDraft, QuestionnaireFacet,
    QuestionnaireStats,
};
use contracts::domain::common::ListResponse;
use contracts::shared::format::{format_date, format_percent};
use contracts::shared::metadata::{validate, ValidationErrors};

use super::repository;
use crate::shared::config::list_config;
use crate::shared::export::{to_csv, CsvRow};
use crate::shared::list_query::{filter_all, run_query, ListQuery, ListQueryError};

pub async fn list_all() -> anyhow::Result<Vec<Questionnaire>> {
    Ok(repository::list_all().to_vec())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<Questionnaire>> {
    Ok(repository::get_by_id(id))
}

pub fn query(
    query: &ListQuery,
) -> Result<ListResponse<Questionnaire, QuestionnaireStats>, ListQueryError> {
    run_query(
        repository::list_all(),
        query,
        QuestionnaireFacet::all(),
        QuestionnaireStats::compute,
        list_config(),
    )
}

pub fn export_csv(query: &ListQuery) -> Result<String, ListQueryError> {
    to_csv(&filter_all(repository::list_all(), query)?)
}

pub fn validate_draft(draft: &QuestionnaireDraft) -> ValidationErrors {
    let mut errors = validate(draft);
    // категория должна быть одной из известных
    if !draft.category.is_empty()
        && draft.category.parse::<QuestionnaireCategory>().is_err()
    {
        errors.insert("category", format!("Unknown category '{}'", draft.category));
    }
    errors
}

impl CsvRow for Questionnaire {
    fn headers() -> &'static [&'static str] {
        &[
            "Code",
            "Name",
            "Category",
            "Status",
            "Questions",
            "Completion rate",
            "Usage",
            "Qualified leads",
            "Last modified",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.category.display_name().to_string(),
            self.status.display_name().to_string(),
            self.questions.to_string(),
            format_percent(self.completion_rate, 1),
            self.usage_count.to_string(),
            self.qualified_leads.to_string(),
            format_date(self.last_modified),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_query_by_category_and_status() {
        let mut map = HashMap::new();
        map.insert("category".to_string(), "kitchen".to_string());
        map.insert("status".to_string(), "active".to_string());
        let response = query(&ListQuery::from_map(map).unwrap()).unwrap();

        assert_eq!(response.total_items, 2);
        assert_eq!(response.stats_all.total, 7);
        assert_eq!(response.stats_filtered.active, 2);
        assert_eq!(response.facet_options["category"].len(), 4);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let draft = QuestionnaireDraft {
            name: "Pantry".into(),
            category: "garden".into(),
            target_segment: "Commercial".into(),
            description: String::new(),
            avg_completion_time: 10.0,
        };
        let errors = validate_draft(&draft);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("category").is_some());

        let valid = QuestionnaireDraft {
            category: "appliances".into(),
            ..draft
        };
        assert!(validate_draft(&valid).is_empty());
    }

    #[tokio::test]
    async fn test_list_all_keeps_seed_order() {
        let all = list_all().await.unwrap();
        assert_eq!(all.first().map(|q| q.code.as_str()), Some("QST-001"));
        assert_eq!(all.len(), 7);
    }
}
