//! Validation rules for form fields

use crate::shared::format::parse_iso_date;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{} is required", field_label));
        }
        if trimmed.is_empty() {
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value; a required number must be greater than zero
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if self.required && !(value > 0.0) {
            return Err(format!("{} must be greater than zero", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate an ISO date entered as text
    pub fn validate_date(&self, value: &str, field_label: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return if self.required {
                Err(format!("{} is required", field_label))
            } else {
                Ok(())
            };
        }
        parse_iso_date(value)
            .map(|_| ())
            .map_err(|_| format!("{} must be a valid date (YYYY-MM-DD)", field_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert_eq!(rules.validate_string("   ", "Title"), Err("Title is required".into()));
        assert!(rules.validate_string("Kitchen", "Title").is_ok());
        assert!(ValidationRules::none().validate_string("", "Title").is_ok());
    }

    #[test]
    fn test_length_bounds() {
        let rules = ValidationRules::required().with_min_length(3).with_max_length(5);
        assert!(rules.validate_string("ab", "Code").is_err());
        assert!(rules.validate_string("abcdef", "Code").is_err());
        assert!(rules.validate_string(" abc ", "Code").is_ok());
    }

    #[test]
    fn test_required_number() {
        let rules = ValidationRules::required();
        assert!(rules.validate_number(0.0, "Total value").is_err());
        assert!(rules.validate_number(-5.0, "Total value").is_err());
        assert!(rules.validate_number(f64::NAN, "Total value").is_err());
        assert!(rules.validate_number(1.0, "Total value").is_ok());
        assert!(ValidationRules::none().validate_number(0.0, "Optional").is_ok());
        assert!(ValidationRules::none().with_max(100.0).validate_number(101.0, "Rate").is_err());
    }

    #[test]
    fn test_number_min() {
        let rules = ValidationRules::required().with_min(1.0);
        assert_eq!(
            rules.validate_number(0.4, "Quantity"),
            Err("Quantity must be at least 1".into())
        );
        assert!(rules.validate_number(1.0, "Quantity").is_ok());
    }

    #[test]
    fn test_date() {
        let rules = ValidationRules::required();
        assert!(rules.validate_date("2025-12-31", "Valid until").is_ok());
        assert_eq!(
            rules.validate_date("31-12-2025", "Valid until"),
            Err("Valid until must be a valid date (YYYY-MM-DD)".into())
        );
        assert_eq!(rules.validate_date("", "Valid until"), Err("Valid until is required".into()));
    }
}
