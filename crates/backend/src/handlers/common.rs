//! Shared pieces of the list handlers

use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::ValidateResponse;
use contracts::shared::metadata::ValidationErrors;
use std::collections::HashMap;

use crate::shared::list_query::{ListQuery, ListQueryError};

/// Ошибка запроса списка -> код ответа, с записью в лог
pub fn reject(context: &str, e: ListQueryError) -> StatusCode {
    let status = e.status_code();
    if status.is_server_error() {
        tracing::error!("{}: {}", context, e);
    } else {
        tracing::warn!("{}: {}", context, e);
    }
    status
}

pub fn parse_query(context: &str, raw: HashMap<String, String>) -> Result<ListQuery, StatusCode> {
    ListQuery::from_map(raw).map_err(|e| reject(context, e))
}

/// 200 `{ ok: true }` or 422 with the field errors
pub fn validation_response(errors: ValidationErrors) -> (StatusCode, Json<ValidateResponse>) {
    if errors.is_empty() {
        (
            StatusCode::OK,
            Json(ValidateResponse {
                ok: true,
                errors,
            }),
        )
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidateResponse { ok: false, errors }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_response() {
        let (status, Json(body)) = validation_response(ValidationErrors::default());
        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);

        let mut errors = ValidationErrors::default();
        errors.insert("title", "Title is required".into());
        let (status, Json(body)) = validation_response(errors);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.errors.get("title"), Some("Title is required"));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ok": false, "errors": { "title": "Title is required" } })
        );
    }
}
