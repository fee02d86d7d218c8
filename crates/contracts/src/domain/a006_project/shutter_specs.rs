//! Shutter specification of a project (editable through the project service)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::metadata::{FieldMetadata, FieldValue, FormDraft, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShutterSpecs {
    pub project_id: String,
    pub shutter_type: String,
    pub material: String,
    pub finish: String,
    pub width_mm: u32,
    pub height_mm: u32,
    pub quantity: u32,
    #[serde(default)]
    pub notes: String,
    pub updated_at: Option<NaiveDate>,
}

impl ShutterSpecs {
    /// Общая площадь створок, м²
    pub fn total_area_sq_m(&self) -> f64 {
        self.width_mm as f64 * self.height_mm as f64 * self.quantity as f64 / 1_000_000.0
    }
}

static FIELDS: [FieldMetadata; 7] = [
    FieldMetadata::text("shutterType", "Shutter type", "specs").rules(ValidationRules::required()),
    FieldMetadata::text("material", "Material", "specs").rules(ValidationRules::required()),
    FieldMetadata::text("finish", "Finish", "specs"),
    FieldMetadata::number("widthMm", "Width (mm)", "dimensions")
        .rules(ValidationRules::required().with_min(1.0).with_max(3000.0)),
    FieldMetadata::number("heightMm", "Height (mm)", "dimensions")
        .rules(ValidationRules::required().with_min(1.0).with_max(3000.0)),
    FieldMetadata::number("quantity", "Quantity", "dimensions")
        .rules(ValidationRules::required().with_min(1.0).with_max(10_000.0)),
    FieldMetadata::text("notes", "Notes", "specs")
        .rules(ValidationRules::none().with_max_length(500)),
];

/// Editable copy of [`ShutterSpecs`]; numbers stay `f64` while typing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShutterSpecsDraft {
    pub shutter_type: String,
    pub material: String,
    pub finish: String,
    pub width_mm: f64,
    pub height_mm: f64,
    pub quantity: f64,
    pub notes: String,
}

impl ShutterSpecsDraft {
    pub fn from_specs(specs: &ShutterSpecs) -> Self {
        Self {
            shutter_type: specs.shutter_type.clone(),
            material: specs.material.clone(),
            finish: specs.finish.clone(),
            width_mm: specs.width_mm as f64,
            height_mm: specs.height_mm as f64,
            quantity: specs.quantity as f64,
            notes: specs.notes.clone(),
        }
    }

    /// Call only after a successful `validate`; numbers are rounded
    pub fn to_specs(&self, project_id: &str) -> ShutterSpecs {
        ShutterSpecs {
            project_id: project_id.to_string(),
            shutter_type: self.shutter_type.trim().to_string(),
            material: self.material.trim().to_string(),
            finish: self.finish.trim().to_string(),
            width_mm: self.width_mm.round() as u32,
            height_mm: self.height_mm.round() as u32,
            quantity: self.quantity.round() as u32,
            notes: self.notes.clone(),
            updated_at: None,
        }
    }
}

impl FormDraft for ShutterSpecsDraft {
    fn field_metadata() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "shutterType" => Some(FieldValue::Text(&self.shutter_type)),
            "material" => Some(FieldValue::Text(&self.material)),
            "finish" => Some(FieldValue::Text(&self.finish)),
            "widthMm" => Some(FieldValue::Number(self.width_mm)),
            "heightMm" => Some(FieldValue::Number(self.height_mm)),
            "quantity" => Some(FieldValue::Number(self.quantity)),
            "notes" => Some(FieldValue::Text(&self.notes)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::validate;

    fn specs() -> ShutterSpecs {
        ShutterSpecs {
            project_id: "p1".into(),
            shutter_type: "Handleless".into(),
            material: "BWP Plywood".into(),
            finish: "Acrylic".into(),
            width_mm: 600,
            height_mm: 720,
            quantity: 10,
            notes: String::new(),
            updated_at: None,
        }
    }

    #[test]
    fn test_draft_round_trip_is_valid() {
        let draft = ShutterSpecsDraft::from_specs(&specs());
        assert!(validate(&draft).is_empty());
        assert_eq!(draft.to_specs("p1"), specs());
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        let draft = ShutterSpecsDraft {
            quantity: 0.0,
            width_mm: -1.0,
            ..ShutterSpecsDraft::from_specs(&specs())
        };
        let errors = validate(&draft);
        assert_eq!(errors.get("quantity"), Some("Quantity must be greater than zero"));
        assert!(errors.get("widthMm").is_some());
        assert!(errors.get("heightMm").is_none());
    }

    #[test]
    fn test_fractions_below_one_are_rejected() {
        let draft = ShutterSpecsDraft {
            height_mm: 0.4,
            quantity: 0.4,
            ..ShutterSpecsDraft::from_specs(&specs())
        };
        let errors = validate(&draft);
        assert_eq!(errors.get("heightMm"), Some("Height (mm) must be at least 1"));
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 1"));
    }

    #[test]
    fn test_quantity_upper_bound() {
        let draft = ShutterSpecsDraft {
            quantity: 1e12,
            ..ShutterSpecsDraft::from_specs(&specs())
        };
        assert!(validate(&draft).get("quantity").is_some());
    }

    #[test]
    fn test_valid_draft_stores_positive_numbers() {
        let draft = ShutterSpecsDraft {
            width_mm: 1.0,
            height_mm: 1.4,
            quantity: 1.0,
            ..ShutterSpecsDraft::from_specs(&specs())
        };
        assert!(validate(&draft).is_empty());
        let stored = draft.to_specs("p1");
        assert!(stored.width_mm >= 1 && stored.height_mm >= 1 && stored.quantity >= 1);
    }

    #[test]
    fn test_total_area() {
        assert!((specs().total_area_sq_m() - 4.32).abs() < 1e-9);
    }
}
