use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a004_kanban_card::{KanbanBoard, KanbanCard, KanbanStats};
use contracts::domain::common::ListResponse;
use std::collections::HashMap;

use super::common::{parse_query, reject};
use crate::domain::a004_kanban_card;
use crate::shared::export::csv_response;

/// GET /api/a004/kanban/cards
pub async fn list_all() -> Result<Json<Vec<KanbanCard>>, StatusCode> {
    a004_kanban_card::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list kanban cards: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a004/kanban/cards/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<KanbanCard>, StatusCode> {
    match a004_kanban_card::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get kanban card {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a004/kanban/cards/query
pub async fn query(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<KanbanCard, KanbanStats>>, StatusCode> {
    let query = parse_query("kanban query", raw)?;
    a004_kanban_card::service::query(&query)
        .map(Json)
        .map_err(|e| reject("kanban query", e))
}

/// GET /api/a004/kanban/board?q=&priority=&assignee=
pub async fn board(Query(raw): Query<HashMap<String, String>>) -> Result<Json<KanbanBoard>, StatusCode> {
    let query = parse_query("kanban board", raw)?;
    a004_kanban_card::service::board(&query)
        .map(Json)
        .map_err(|e| reject("kanban board", e))
}

/// GET /api/a004/kanban/cards/export
pub async fn export(Query(raw): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let query = parse_query("kanban export", raw)?;
    let body = a004_kanban_card::service::export_csv(&query).map_err(|e| reject("kanban export", e))?;
    Ok(csv_response("kanban.csv", body))
}
