use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a003_cost_breakdown::{CostBreakdown, CostBreakdownStats};
use contracts::domain::common::ListResponse;
use std::collections::HashMap;

use super::common::{parse_query, reject};
use crate::domain::a003_cost_breakdown;
use crate::shared::export::csv_response;

/// GET /api/a003/cost-breakdowns
pub async fn list_all() -> Result<Json<Vec<CostBreakdown>>, StatusCode> {
    a003_cost_breakdown::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list cost breakdowns: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a003/cost-breakdowns/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<CostBreakdown>, StatusCode> {
    match a003_cost_breakdown::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get cost breakdown {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a003/cost-breakdowns/query
pub async fn query(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<CostBreakdown, CostBreakdownStats>>, StatusCode> {
    let query = parse_query("cost breakdown query", raw)?;
    a003_cost_breakdown::service::query(&query)
        .map(Json)
        .map_err(|e| reject("cost breakdown query", e))
}

/// GET /api/a003/cost-breakdowns/export
pub async fn export(Query(raw): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let query = parse_query("cost breakdown export", raw)?;
    let body = a003_cost_breakdown::service::export_csv(&query)
        .map_err(|e| reject("cost breakdown export", e))?;
    Ok(csv_response("cost-breakdown.csv", body))
}
