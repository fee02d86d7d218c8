//! Create/edit form of a proposal

use serde::{Deserialize, Serialize};

use super::aggregate::Proposal;
use crate::shared::metadata::{FieldMetadata, FieldValue, FormDraft, ValidationRules};

pub const TAB_DETAILS: &str = "details";
pub const TAB_PRICING: &str = "pricing";

static FIELDS: [FieldMetadata; 6] = [
    FieldMetadata::text("title", "Title", TAB_DETAILS)
        .rules(ValidationRules::required().with_max_length(120)),
    FieldMetadata::text("customerName", "Customer name", TAB_DETAILS)
        .rules(ValidationRules::required()),
    FieldMetadata::text("contactEmail", "Contact email", TAB_DETAILS)
        .rules(ValidationRules::required()),
    FieldMetadata::text("notes", "Notes", TAB_DETAILS)
        .rules(ValidationRules::none().with_max_length(1000)),
    FieldMetadata::number("totalValue", "Total value", TAB_PRICING)
        .rules(ValidationRules::required()),
    FieldMetadata::date("validUntil", "Valid until", TAB_PRICING)
        .rules(ValidationRules::required()),
];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub title: String,
    pub customer_name: String,
    pub contact_email: String,
    pub notes: String,
    pub total_value: f64,
    /// `YYYY-MM-DD` as typed into the date input
    pub valid_until: String,
}

impl ProposalDraft {
    /// Prefill the edit form
    pub fn from_proposal(p: &Proposal) -> Self {
        Self {
            title: p.title.clone(),
            customer_name: p.customer_name.clone(),
            contact_email: p.contact_email.clone(),
            notes: String::new(),
            total_value: p.total_value as f64,
            valid_until: p.valid_until.format("%Y-%m-%d").to_string(),
        }
    }
}

impl FormDraft for ProposalDraft {
    fn field_metadata() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "customerName" => Some(FieldValue::Text(&self.customer_name)),
            "contactEmail" => Some(FieldValue::Text(&self.contact_email)),
            "notes" => Some(FieldValue::Text(&self.notes)),
            "totalValue" => Some(FieldValue::Number(self.total_value)),
            "validUntil" => Some(FieldValue::Text(&self.valid_until)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_proposal::aggregate::tests::sample;
    use crate::shared::metadata::{submit, validate, FormProgress};

    #[test]
    fn test_empty_title_blocks_submit() {
        let mut draft = ProposalDraft::from_proposal(&sample()[0]);
        draft.title = String::new();

        let mut submitted = false;
        let result = submit(&draft, |_| submitted = true);

        let errors = result.unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(!submitted);
        assert_eq!(errors.tabs_with_errors::<ProposalDraft>(), vec![TAB_DETAILS]);
    }

    #[test]
    fn test_prefilled_draft_is_valid() {
        let draft = ProposalDraft::from_proposal(&sample()[1]);
        assert_eq!(draft.valid_until, "2025-12-31");
        assert!(validate(&draft).is_empty());
        assert!(FormProgress::of(&draft).is_complete());
    }

    #[test]
    fn test_new_draft_errors() {
        let errors = validate(&ProposalDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.tabs_with_errors::<ProposalDraft>(),
            vec![TAB_DETAILS, TAB_PRICING]
        );
        assert_eq!(FormProgress::of(&ProposalDraft::default()).completed, 0);
    }
}
