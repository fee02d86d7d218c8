//! Клиент project management service (проекты и спецификации створок)

use crate::shared::api_utils::{get_json, put_json};
use contracts::domain::a006_project::{Project, ShutterSpecs, ShutterSpecsDraft};

const PROJECTS_PATH: &str = "/api/a006/projects";

fn shutter_specs_path(project_id: &str) -> String {
    format!("{}/{}/shutter-specs", PROJECTS_PATH, project_id)
}

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    get_json(PROJECTS_PATH).await
}

/// 404 здесь тоже ошибка: страница спецификаций без проекта не имеет смысла
pub async fn fetch_shutter_specs(project_id: &str) -> Result<ShutterSpecs, String> {
    get_json(&shutter_specs_path(project_id)).await
}

pub async fn put_shutter_specs(project_id: &str, draft: &ShutterSpecsDraft) -> Result<ShutterSpecs, String> {
    put_json(&shutter_specs_path(project_id), draft).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutter_specs_path() {
        assert_eq!(shutter_specs_path("prj-001"), "/api/a006/projects/prj-001/shutter-specs");
    }
}
