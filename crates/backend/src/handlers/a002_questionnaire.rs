use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a002_questionnaire::{Questionnaire, QuestionnaireDraft, QuestionnaireStats};
use contracts::domain::common::{ListResponse, ValidateResponse};
use std::collections::HashMap;

use super::common::{parse_query, reject, validation_response};
use crate::domain::a002_questionnaire;
use crate::shared::export::csv_response;

/// GET /api/a002/questionnaires
pub async fn list_all() -> Result<Json<Vec<Questionnaire>>, StatusCode> {
    a002_questionnaire::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list questionnaires: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a002/questionnaires/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Questionnaire>, StatusCode> {
    match a002_questionnaire::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get questionnaire {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a002/questionnaires/query
pub async fn query(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Questionnaire, QuestionnaireStats>>, StatusCode> {
    let query = parse_query("questionnaires query", raw)?;
    a002_questionnaire::service::query(&query)
        .map(Json)
        .map_err(|e| reject("questionnaires query", e))
}

/// GET /api/a002/questionnaires/export
pub async fn export(Query(raw): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let query = parse_query("questionnaires export", raw)?;
    let body = a002_questionnaire::service::export_csv(&query)
        .map_err(|e| reject("questionnaires export", e))?;
    Ok(csv_response("questionnaires.csv", body))
}

/// POST /api/a002/questionnaires/validate
pub async fn validate(
    Json(draft): Json<QuestionnaireDraft>,
) -> (StatusCode, Json<ValidateResponse>) {
    validation_response(a002_questionnaire::service::validate_draft(&draft))
}
