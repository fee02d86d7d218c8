use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::BadgeVariant;
use crate::shared::list_view::{ListRecord, ListViewError};
use crate::wire_enum;

wire_enum! {
    pub enum ProjectStatus ("project status") {
        Planning => "planning", "Planning";
        InProgress => "in-progress", "In Progress";
        OnHold => "on-hold", "On Hold";
        Completed => "completed", "Completed";
    }
}

impl ProjectStatus {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Planning => BadgeVariant::Neutral,
            Self::InProgress => BadgeVariant::Primary,
            Self::OnHold => BadgeVariant::Warning,
            Self::Completed => BadgeVariant::Success,
        }
    }
}

wire_enum! {
    pub enum ProjectFacet [ListViewError::UnknownFacet] {
        Status => "status", "Status";
    }
}

wire_enum! {
    pub enum ProjectSortKey [ListViewError::UnknownSortKey] {
        Name => "name", "Name";
        StartDate => "start_date", "Start date";
        Progress => "progress", "Progress";
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_code: String,
    pub name: String,
    pub customer_name: String,
    pub status: ProjectStatus,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    /// 0..=100
    pub progress: u8,
}

impl ListRecord for Project {
    type Facet = ProjectFacet;
    type SortKey = ProjectSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.project_code.as_str(),
            self.name.as_str(),
            self.customer_name.as_str(),
        ]
    }

    fn facet_value(&self, facet: ProjectFacet) -> &str {
        match facet {
            ProjectFacet::Status => self.status.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: ProjectSortKey) -> Ordering {
        match key {
            ProjectSortKey::Name => self.name.cmp(&other.name),
            ProjectSortKey::StartDate => self.start_date.cmp(&other.start_date),
            ProjectSortKey::Progress => self.progress.cmp(&other.progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter, ListParams};

    #[test]
    fn test_search_and_status() {
        let project = Project {
            id: "p1".into(),
            project_code: "PRJ-2025-014".into(),
            name: "Lodha Tower Kitchens".into(),
            customer_name: "Lodha Group".into(),
            status: ProjectStatus::InProgress,
            location: "Mumbai".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            budget: 45_000_000,
            progress: 40,
        };
        let records = vec![project];

        let by_code = ListParams::default().with_query("prj-2025");
        assert_eq!(filter(&records, &by_code).len(), 1);

        let on_hold = ListParams::default().with_facet(ProjectFacet::Status, "on-hold");
        assert!(filter(&records, &on_hold).is_empty());

        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["startDate"], "2025-04-01");
    }
}
