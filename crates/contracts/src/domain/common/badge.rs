use serde::{Deserialize, Serialize};

/// Visual variant of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl BadgeVariant {
    /// CSS modifier, e.g. `badge--success`
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Primary => "badge--primary",
            Self::Success => "badge--success",
            Self::Warning => "badge--warning",
            Self::Error => "badge--error",
            Self::Neutral => "badge--neutral",
        }
    }
}
