use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a001_proposal::{Proposal, ProposalDraft, ProposalStats};
use contracts::domain::common::{ListResponse, ValidateResponse};
use std::collections::HashMap;

use super::common::{parse_query, reject, validation_response};
use crate::domain::a001_proposal;
use crate::shared::export::csv_response;

/// GET /api/a001/proposals
pub async fn list_all() -> Result<Json<Vec<Proposal>>, StatusCode> {
    match a001_proposal::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list proposals: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a001/proposals/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Proposal>, StatusCode> {
    match a001_proposal::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get proposal {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a001/proposals/query?q=&status=&sort=&dir=&page=&page_size=
pub async fn query(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Proposal, ProposalStats>>, StatusCode> {
    let query = parse_query("proposals query", raw)?;
    a001_proposal::service::query(&query)
        .map(Json)
        .map_err(|e| reject("proposals query", e))
}

/// GET /api/a001/proposals/export
pub async fn export(Query(raw): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let query = parse_query("proposals export", raw)?;
    let body = a001_proposal::service::export_csv(&query).map_err(|e| reject("proposals export", e))?;
    Ok(csv_response("proposals.csv", body))
}

/// POST /api/a001/proposals/validate
pub async fn validate(Json(draft): Json<ProposalDraft>) -> (StatusCode, Json<ValidateResponse>) {
    validation_response(a001_proposal::service::validate_draft(&draft))
}
