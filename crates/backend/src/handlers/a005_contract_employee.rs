use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use contracts::domain::a005_contract_employee::{ContractEmployee, ContractEmployeeStats};
use contracts::domain::common::ListResponse;
use std::collections::HashMap;

use super::common::{parse_query, reject};
use crate::domain::a005_contract_employee;
use crate::shared::export::csv_response;

/// GET /api/a005/contract-employees
pub async fn list_all() -> Result<Json<Vec<ContractEmployee>>, StatusCode> {
    a005_contract_employee::service::list_all()
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to list contract employees: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// GET /api/a005/contract-employees/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<ContractEmployee>, StatusCode> {
    match a005_contract_employee::service::get_by_id(&id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get contract employee {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a005/contract-employees/query
pub async fn query(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<ContractEmployee, ContractEmployeeStats>>, StatusCode> {
    let query = parse_query("contract employees query", raw)?;
    a005_contract_employee::service::query(&query)
        .map(Json)
        .map_err(|e| reject("contract employees query", e))
}

/// GET /api/a005/contract-employees/export
pub async fn export(Query(raw): Query<HashMap<String, String>>) -> Result<Response, StatusCode> {
    let query = parse_query("contract employees export", raw)?;
    let body = a005_contract_employee::service::export_csv(&query)
        .map_err(|e| reject("contract employees export", e))?;
    Ok(csv_response("contract-employees.csv", body))
}
