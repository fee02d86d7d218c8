use serde::{Deserialize, Serialize};

use crate::shared::metadata::{FieldMetadata, FieldValue, FormDraft, ValidationRules};

static FIELDS: [FieldMetadata; 5] = [
    FieldMetadata::text("name", "Name", "general").rules(ValidationRules::required()),
    FieldMetadata::text("category", "Category", "general").rules(ValidationRules::required()),
    FieldMetadata::text("targetSegment", "Target segment", "general")
        .rules(ValidationRules::required()),
    FieldMetadata::text("description", "Description", "general")
        .rules(ValidationRules::none().with_max_length(500)),
    FieldMetadata::number("avgCompletionTime", "Avg completion time (min)", "general")
        .rules(ValidationRules::required().with_max(120.0)),
];

/// Форма создания анкеты (модальное окно)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireDraft {
    pub name: String,
    /// Wire value of `QuestionnaireCategory`, empty until chosen
    pub category: String,
    pub target_segment: String,
    pub description: String,
    pub avg_completion_time: f64,
}

impl FormDraft for QuestionnaireDraft {
    fn field_metadata() -> &'static [FieldMetadata] {
        &FIELDS
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(&self.category)),
            "targetSegment" => Some(FieldValue::Text(&self.target_segment)),
            "description" => Some(FieldValue::Text(&self.description)),
            "avgCompletionTime" => Some(FieldValue::Number(self.avg_completion_time)),
            _ => None,
        }
    }
}
