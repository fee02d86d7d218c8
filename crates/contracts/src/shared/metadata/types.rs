//! Field metadata for create/edit forms
//!
//! All types use 'static lifetimes so drafts can expose their fields as
//! compile-time constants.

use super::validation::ValidationRules;

/// How a field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    /// ISO `YYYY-MM-DD` text
    Date,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Form tab the field is rendered on
    pub tab: &'static str,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub const fn text(name: &'static str, label: &'static str, tab: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            tab,
            validation: ValidationRules::none(),
        }
    }

    pub const fn number(name: &'static str, label: &'static str, tab: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label, tab)
        }
    }

    pub const fn date(name: &'static str, label: &'static str, tab: &'static str) -> Self {
        Self {
            kind: FieldKind::Date,
            ..Self::text(name, label, tab)
        }
    }

    pub const fn rules(mut self, validation: ValidationRules) -> Self {
        self.validation = validation;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }
}

/// Current value of a draft field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    /// Filled-in check used by the progress indicator
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::Number(n) => *n > 0.0,
        }
    }
}

/// A user-editable draft of a record
pub trait FormDraft {
    fn field_metadata() -> &'static [FieldMetadata];

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}
