//! Draft validation and submit gating

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{FieldKind, FieldValue, FormDraft};

/// Field name -> error message, for every invalid field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &str, message: String) {
        self.0.insert(field.to_string(), message);
    }

    /// Tabs that contain at least one invalid field, in field order
    pub fn tabs_with_errors<D: FormDraft>(&self) -> Vec<&'static str> {
        let mut tabs: Vec<&'static str> = Vec::new();
        for field in D::field_metadata() {
            if self.0.contains_key(field.name) && !tabs.contains(&field.tab) {
                tabs.push(field.tab);
            }
        }
        tabs
    }
}

/// Check every field of the draft against its rules
pub fn validate<D: FormDraft>(draft: &D) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in D::field_metadata() {
        let rules = field.validation;
        let result = match (field.kind, draft.field_value(field.name)) {
            (FieldKind::Date, Some(FieldValue::Text(s))) => rules.validate_date(s, field.label),
            (_, Some(FieldValue::Text(s))) => rules.validate_string(s, field.label),
            (_, Some(FieldValue::Number(n))) => rules.validate_number(n, field.label),
            (_, None) if rules.required => Err(format!("{} is required", field.label)),
            (_, None) => Ok(()),
        };
        if let Err(message) = result {
            errors.insert(field.name, message);
        }
    }

    errors
}

/// Run `on_success` only if the draft is valid; otherwise return the errors
/// and never call it.
pub fn submit<D, T, F>(draft: &D, on_success: F) -> Result<T, ValidationErrors>
where
    D: FormDraft,
    F: FnOnce(&D) -> T,
{
    let errors = validate(draft);
    if errors.is_empty() {
        Ok(on_success(draft))
    } else {
        Err(errors)
    }
}

/// How many required fields are filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormProgress {
    pub completed: usize,
    pub total: usize,
}

impl FormProgress {
    pub fn of<D: FormDraft>(draft: &D) -> Self {
        let mut progress = Self::default();
        for field in D::field_metadata().iter().filter(|f| f.validation.required) {
            progress.total += 1;
            if draft
                .field_value(field.name)
                .map(|v| v.is_filled())
                .unwrap_or(false)
            {
                progress.completed += 1;
            }
        }
        progress
    }

    /// 0..=100; 0 when there are no required fields
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{FieldMetadata, ValidationRules};

    struct NoteDraft {
        title: String,
        body: String,
        amount: f64,
        due: String,
    }

    static NOTE_FIELDS: [FieldMetadata; 4] = [
        FieldMetadata::text("title", "Title", "main").rules(ValidationRules::required()),
        FieldMetadata::text("body", "Body", "main"),
        FieldMetadata::number("amount", "Amount", "pricing").rules(ValidationRules::required()),
        FieldMetadata::date("due", "Due date", "pricing").rules(ValidationRules::required()),
    ];

    impl FormDraft for NoteDraft {
        fn field_metadata() -> &'static [FieldMetadata] {
            &NOTE_FIELDS
        }

        fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
            match name {
                "title" => Some(FieldValue::Text(&self.title)),
                "body" => Some(FieldValue::Text(&self.body)),
                "amount" => Some(FieldValue::Number(self.amount)),
                "due" => Some(FieldValue::Text(&self.due)),
                _ => None,
            }
        }
    }

    fn valid() -> NoteDraft {
        NoteDraft {
            title: "Kitchen".into(),
            body: String::new(),
            amount: 10.0,
            due: "2025-11-30".into(),
        }
    }

    #[test]
    fn test_empty_title_blocks_submit() {
        let draft = NoteDraft {
            title: "   ".into(),
            ..valid()
        };
        let mut called = false;
        let result = submit(&draft, |_| called = true);

        let errors = result.unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.len(), 1);
        assert!(!called);
    }

    #[test]
    fn test_valid_draft_calls_success() {
        let result = submit(&valid(), |d| d.title.clone());
        assert_eq!(result, Ok("Kitchen".to_string()));
    }

    #[test]
    fn test_zero_number_and_bad_date() {
        let draft = NoteDraft {
            amount: 0.0,
            due: "30.11.2025".into(),
            ..valid()
        };
        let errors = validate(&draft);
        assert!(errors.get("amount").is_some());
        assert!(errors.get("due").is_some());
        assert_eq!(errors.tabs_with_errors::<NoteDraft>(), vec!["pricing"]);
    }

    #[test]
    fn test_progress() {
        let empty = NoteDraft {
            title: String::new(),
            body: String::new(),
            amount: 0.0,
            due: String::new(),
        };
        let progress = FormProgress::of(&empty);
        assert_eq!(progress, FormProgress { completed: 0, total: 3 });
        assert_eq!(progress.percentage(), 0.0);

        let full = FormProgress::of(&valid());
        assert!(full.is_complete());
        assert_eq!(full.percentage(), 100.0);
    }
}
