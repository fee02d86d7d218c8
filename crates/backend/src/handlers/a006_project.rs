use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a006_project::{Project, ShutterSpecs, ShutterSpecsDraft};
use contracts::domain::common::ValidateResponse;

use crate::domain::a006_project::service::ProjectServiceError;
use crate::shared::data::store::project_service;

/// Ошибка сервиса проектов -> ответ; 422 несёт ошибки полей
impl IntoResponse for ProjectServiceError {
    fn into_response(self) -> Response {
        match self {
            e @ (ProjectServiceError::ProjectNotFound(_)
            | ProjectServiceError::SpecsNotFound(_)) => {
                tracing::warn!("{}", e);
                StatusCode::NOT_FOUND.into_response()
            }
            ProjectServiceError::Invalid(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidateResponse { ok: false, errors }),
            )
                .into_response(),
            ProjectServiceError::Other(e) => {
                tracing::error!("Project service failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// GET /api/a006/projects
pub async fn list_all() -> Result<Json<Vec<Project>>, ProjectServiceError> {
    project_service().get_projects().await.map(Json)
}

/// GET /api/a006/projects/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Project>, ProjectServiceError> {
    project_service().get_project(&id).await.map(Json)
}

/// GET /api/a006/projects/:id/shutter-specs
pub async fn get_shutter_specs(Path(id): Path<String>) -> Result<Json<ShutterSpecs>, ProjectServiceError> {
    project_service().get_shutter_specs(&id).await.map(Json)
}

/// PUT /api/a006/projects/:id/shutter-specs
pub async fn update_shutter_specs(
    Path(id): Path<String>,
    Json(draft): Json<ShutterSpecsDraft>,
) -> Result<Json<ShutterSpecs>, ProjectServiceError> {
    project_service()
        .update_shutter_specs(&id, draft)
        .await
        .map(Json)
}
