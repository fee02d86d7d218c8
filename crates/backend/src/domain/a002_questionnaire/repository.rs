use contracts::domain::a002_questionnaire::{
    Questionnaire, QuestionnaireCategory, QuestionnaireStatus,
};

use crate::shared::data::store::{get_store, seed_date};

pub fn list_all() -> &'static [Questionnaire] {
    &get_store().questionnaires
}

pub fn get_by_id(id: &str) -> Option<Questionnaire> {
    list_all().iter().find(|q| q.id == id).cloned()
}

#[allow(clippy::too_many_arguments)]
fn questionnaire(
    n: u32,
    name: &str,
    category: QuestionnaireCategory,
    segment: &str,
    status: QuestionnaireStatus,
    questions: u32,
    completion_rate: f64,
    usage_count: u32,
    qualified_leads: u32,
) -> Questionnaire {
    Questionnaire {
        id: format!("qst-{:03}", n),
        code: format!("QST-{:03}", n),
        name: name.to_string(),
        category,
        target_segment: segment.to_string(),
        description: format!("{} for {} customers", name, segment.to_lowercase()),
        status,
        questions,
        avg_completion_time: questions / 2 + 2,
        completion_rate,
        usage_count,
        qualified_leads,
        last_modified: seed_date(2025, 9, 1 + n),
    }
}

pub fn seed() -> Vec<Questionnaire> {
    use QuestionnaireCategory::*;
    use QuestionnaireStatus::*;
    vec![
        questionnaire(1, "Kitchen Needs Assessment", Kitchen, "Residential", Active, 18, 78.5, 342, 126),
        questionnaire(2, "Wardrobe Style Finder", Wardrobe, "Residential", Active, 12, 84.0, 215, 88),
        questionnaire(3, "Appliance Sizing Guide", Appliances, "Residential", Active, 10, 91.2, 156, 47),
        questionnaire(4, "Builder Project Intake", Kitchen, "Builder", Active, 24, 62.3, 48, 31),
        questionnaire(5, "Complete Home Renovation Survey", Renovation, "Premium", Draft, 30, 0.0, 0, 0),
        questionnaire(6, "Compact Kitchen Quick Quiz", Kitchen, "Budget", Archived, 8, 55.0, 410, 72),
        questionnaire(7, "Commercial Pantry Requirements", Appliances, "Commercial", Draft, 16, 0.0, 0, 0),
    ]
}
