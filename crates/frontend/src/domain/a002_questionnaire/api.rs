use crate::shared::api_utils::get_json;
use contracts::domain::a002_questionnaire::Questionnaire;

pub const EXPORT_PATH: &str = "/api/a002/questionnaires/export";

pub async fn fetch_questionnaires() -> Result<Vec<Questionnaire>, String> {
    get_json("/api/a002/questionnaires").await
}
