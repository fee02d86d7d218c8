use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::BadgeVariant;
use crate::shared::list_view::{ListRecord, ListViewError, SortSpec};
use crate::wire_enum;

// ============================================================================
// Enums
// ============================================================================
wire_enum! {
    /// Жизненный цикл коммерческого предложения
    pub enum ProposalStatus ("proposal status") {
        Draft => "draft", "Draft";
        Sent => "sent", "Sent";
        Viewed => "viewed", "Viewed";
        Signed => "signed", "Signed";
    }
}

impl ProposalStatus {
    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            Self::Draft => BadgeVariant::Neutral,
            Self::Sent => BadgeVariant::Primary,
            Self::Viewed => BadgeVariant::Warning,
            Self::Signed => BadgeVariant::Success,
        }
    }
}

wire_enum! {
    pub enum ProposalFacet [ListViewError::UnknownFacet] {
        Status => "status", "Status";
    }
}

wire_enum! {
    pub enum ProposalSortKey [ListViewError::UnknownSortKey] {
        CreatedDate => "created", "Created";
        ValidUntil => "valid_until", "Valid until";
        TotalValue => "total_value", "Value";
        Title => "title", "Title";
    }
}

// ============================================================================
// Record
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    /// Номер вида `PROP-2025-001`
    pub proposal_number: String,
    pub title: String,
    pub customer_name: String,
    pub contact_email: String,
    pub status: ProposalStatus,
    /// Сумма в рупиях, без масштабирования
    pub total_value: i64,
    pub valid_until: NaiveDate,
    pub created_date: NaiveDate,
    pub sections: u32,
    pub views: u32,
}

impl Proposal {
    pub fn is_signed(&self) -> bool {
        self.status == ProposalStatus::Signed
    }
}

impl ListRecord for Proposal {
    type Facet = ProposalFacet;
    type SortKey = ProposalSortKey;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.proposal_number.as_str(),
            self.title.as_str(),
            self.customer_name.as_str(),
        ]
    }

    fn facet_value(&self, facet: ProposalFacet) -> &str {
        match facet {
            ProposalFacet::Status => self.status.as_str(),
        }
    }

    fn compare_by(&self, other: &Self, key: ProposalSortKey) -> Ordering {
        match key {
            ProposalSortKey::CreatedDate => self.created_date.cmp(&other.created_date),
            ProposalSortKey::ValidUntil => self.valid_until.cmp(&other.valid_until),
            ProposalSortKey::TotalValue => self.total_value.cmp(&other.total_value),
            ProposalSortKey::Title => self.title.cmp(&other.title),
        }
    }

    fn default_sort() -> Option<SortSpec<ProposalSortKey>> {
        Some(SortSpec::desc(ProposalSortKey::CreatedDate))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::list_view::{filter, ListParams};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    pub(crate) fn proposal(id: &str, title: &str, status: ProposalStatus, value: i64, created: &str) -> Proposal {
        Proposal {
            id: id.into(),
            proposal_number: format!("PROP-2025-{}", id),
            title: title.into(),
            customer_name: "Sharma Residence".into(),
            contact_email: "rajesh@example.in".into(),
            status,
            total_value: value,
            valid_until: date("2025-12-31"),
            created_date: date(created),
            sections: 6,
            views: 0,
        }
    }

    pub(crate) fn sample() -> Vec<Proposal> {
        vec![
            proposal("001", "Modular Kitchen", ProposalStatus::Signed, 850_000, "2025-10-01"),
            proposal("002", "Wardrobe Package", ProposalStatus::Sent, 320_000, "2025-10-10"),
            proposal("003", "Kitchen Appliances", ProposalStatus::Draft, 150_000, "2025-09-20"),
        ]
    }

    #[test]
    fn test_default_sort_newest_first() {
        let params = ListParams {
            sort: Proposal::default_sort(),
            ..ListParams::default()
        };
        let ids: Vec<String> = filter(&sample(), &params).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["002", "001", "003"]);
    }

    #[test]
    fn test_search_by_number_and_status_facet() {
        let params = ListParams::default()
            .with_query("prop-2025-00")
            .with_facet(ProposalFacet::Status, "draft");
        let result = filter(&sample(), &params);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Kitchen Appliances");
    }

    #[test]
    fn test_status_wire_form() {
        let json = serde_json::to_string(&sample()[0]).unwrap();
        assert!(json.contains("\"status\":\"signed\""));
        assert!(json.contains("\"proposalNumber\":\"PROP-2025-001\""));
        assert!("approved".parse::<ProposalStatus>().is_err());
        assert_eq!(ProposalStatus::Viewed.badge_variant(), BadgeVariant::Warning);
    }
}
