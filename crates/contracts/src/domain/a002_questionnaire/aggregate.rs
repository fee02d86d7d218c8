use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::BadgeVariant;
use crate::shared::list_view::{aggregate, Aggregator, ListRecord, ListViewError};
use crate::wire_enum;

wire_enum! {
    pub enum QuestionnaireStatus ("questionnaire status") {
        Active => "active", "Active";
        Draft => "draft", "Draft";
        Archived => "archived", "Archived";
    }
}

impl QuestionnaireStatus {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Success,
            Self::Draft => BadgeVariant::Warning,
            Self::Archived => BadgeVariant::Neutral,
        }
    }
}

wire_enum! {
    /// Направление, для которого составлена анкета
    pub enum QuestionnaireCategory ("questionnaire category") {
        Kitchen => "kitchen", "Kitchen";
        Wardrobe => "wardrobe", "Wardrobe";
        Appliances => "appliances", "Appliances";
        Renovation => "renovation", "Full renovation";
    }
}

wire_enum! {
    pub enum QuestionnaireFacet [ListViewError::UnknownFacet] {
        Status => "status", "Status";
        Category => "category", "Category";
    }
}

wire_enum! {
    pub enum QuestionnaireSortKey [ListViewError::UnknownSortKey] {
        Name => "name", "Name";
        CompletionRate => "completion_rate", "Completion rate";
        UsageCount => "usage_count", "Usage";
        LastModified => "last_modified", "Last modified";
    }
}

/// Guided-selling questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: QuestionnaireCategory,
    pub target_segment: String,
    pub description: String,
    pub status: QuestionnaireStatus,
    pub questions: u32,
    /// Минуты
    pub avg_completion_time: u32,
    /// 0..=100
    pub completion_rate: f64,
    pub usage_count: u32,
    pub qualified_leads: u32,
    pub last_modified: NaiveDate,
}

impl Questionnaire {
    pub fn is_active(&self) -> bool {
        self.status == QuestionnaireStatus::Active
    }
}

impl ListRecord for Questionnaire {
    type Facet = QuestionnaireFacet;
    type SortKey = QuestionnaireSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.code.as_str(),
            self.name.as_str(),
            self.category.as_str(),
        ]
    }

    fn facet_value(&self, facet: QuestionnaireFacet) -> &str {
        match facet {
            QuestionnaireFacet::Status => self.status.as_str(),
            QuestionnaireFacet::Category => self.category.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: QuestionnaireSortKey) -> Ordering {
        match key {
            QuestionnaireSortKey::Name => self.name.cmp(&other.name),
            QuestionnaireSortKey::CompletionRate => self.completion_rate.total_cmp(&other.completion_rate),
            QuestionnaireSortKey::UsageCount => self.usage_count.cmp(&other.usage_count),
            QuestionnaireSortKey::LastModified => self.last_modified.cmp(&other.last_modified),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireStats {
    pub total: usize,
    pub active: usize,
    pub avg_completion_rate: Option<f64>,
    pub total_usage: f64,
    pub qualified_leads: f64,
}

impl QuestionnaireStats {
    pub fn compute(subset: &[Questionnaire]) -> Self {
        Self {
            total: aggregate(subset, &Aggregator::Count).as_count(),
            active: aggregate(subset, &Aggregator::CountWhere(Questionnaire::is_active)).as_count(),
            avg_completion_rate: aggregate(
                subset,
                &Aggregator::Mean(|q: &Questionnaire| q.completion_rate),
            )
            .as_f64(),
            total_usage: aggregate(subset, &Aggregator::Sum(|q: &Questionnaire| q.usage_count as f64))
                .as_f64()
                .unwrap_or(0.0),
            qualified_leads: aggregate(
                subset,
                &Aggregator::Sum(|q: &Questionnaire| q.qualified_leads as f64),
            )
            .as_f64()
            .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::list_view::{ListViewModel, Scope};

    pub(crate) fn questionnaire(
        code: &str,
        name: &str,
        category: QuestionnaireCategory,
        status: QuestionnaireStatus,
        completion_rate: f64,
    ) -> Questionnaire {
        Questionnaire {
            id: code.to_lowercase(),
            code: code.into(),
            name: name.into(),
            category,
            target_segment: "Residential".into(),
            description: String::new(),
            status,
            questions: 12,
            avg_completion_time: 8,
            completion_rate,
            usage_count: 100,
            qualified_leads: 40,
            last_modified: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        }
    }

    fn sample() -> Vec<Questionnaire> {
        use QuestionnaireCategory::*;
        use QuestionnaireStatus::*;
        vec![
            questionnaire("QST-001", "Kitchen Needs Assessment", Kitchen, Active, 80.0),
            questionnaire("QST-002", "Wardrobe Style Finder", Wardrobe, Active, 60.0),
            questionnaire("QST-003", "Chimney Sizing", Appliances, Draft, 0.0),
            questionnaire("QST-004", "Legacy Kitchen Survey", Kitchen, Archived, 40.0),
        ]
    }

    #[test]
    fn test_category_is_searchable() {
        let mut model = ListViewModel::new(sample());
        model.set_query("KITCHEN");
        assert_eq!(model.filtered().len(), 2);

        model.set_query("appliances");
        assert_eq!(model.filtered()[0].code, "QST-003");
    }

    #[test]
    fn test_status_and_category_facets() {
        let mut model = ListViewModel::new(sample());
        model.set_facet(QuestionnaireFacet::Category, "kitchen");
        model.set_facet(QuestionnaireFacet::Status, "active");
        assert_eq!(model.filtered().len(), 1);

        let count = model.aggregate(&Aggregator::Count, Scope::All).as_count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_stats() {
        let stats = QuestionnaireStats::compute(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.avg_completion_rate, Some(45.0));
        assert_eq!(stats.total_usage, 400.0);
        assert_eq!(stats.qualified_leads, 160.0);

        assert_eq!(QuestionnaireStats::compute(&[]).avg_completion_rate, None);
    }
}
