//! Project management collaborator: projects plus their shutter specs

use async_trait::async_trait;
use chrono::Local;
use contracts::domain::a006_project::{Project, ShutterSpecs, ShutterSpecsDraft};
use contracts::shared::metadata::{validate, ValidationErrors};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Shutter specs not found for project {0}")]
    SpecsNotFound(String),

    #[error("Invalid shutter specs")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Трейт сервиса управления проектами
#[async_trait]
pub trait ProjectManagementService: Send + Sync {
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectServiceError>;

    async fn get_project(&self, id: &str) -> Result<Project, ProjectServiceError>;

    async fn get_shutter_specs(&self, project_id: &str) -> Result<ShutterSpecs, ProjectServiceError>;

    /// Validate the draft and replace the project's specs
    async fn update_shutter_specs(
        &self,
        project_id: &str,
        draft: ShutterSpecsDraft,
    ) -> Result<ShutterSpecs, ProjectServiceError>;
}

/// Проекты неизменяемы; спецификации под RwLock, теряются при перезапуске
pub struct InMemoryProjectService {
    projects: Vec<Project>,
    specs: RwLock<HashMap<String, ShutterSpecs>>,
}

impl InMemoryProjectService {
    pub fn new(projects: Vec<Project>, specs: Vec<ShutterSpecs>) -> Self {
        let specs = specs
            .into_iter()
            .map(|s| (s.project_id.clone(), s))
            .collect();
        Self {
            projects,
            specs: RwLock::new(specs),
        }
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    fn find(&self, id: &str) -> Result<&Project, ProjectServiceError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ProjectServiceError::ProjectNotFound(id.to_string()))
    }
}

#[async_trait]
impl ProjectManagementService for InMemoryProjectService {
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        Ok(self.projects.clone())
    }

    async fn get_project(&self, id: &str) -> Result<Project, ProjectServiceError> {
        self.find(id).cloned()
    }

    async fn get_shutter_specs(&self, project_id: &str) -> Result<ShutterSpecs, ProjectServiceError> {
        self.find(project_id)?;
        self.specs
            .read()
            .await
            .get(project_id)
            .cloned()
            .ok_or_else(|| ProjectServiceError::SpecsNotFound(project_id.to_string()))
    }

    async fn update_shutter_specs(
        &self,
        project_id: &str,
        draft: ShutterSpecsDraft,
    ) -> Result<ShutterSpecs, ProjectServiceError> {
        self.find(project_id)?;

        let errors = validate(&draft);
        if !errors.is_empty() {
            return Err(ProjectServiceError::Invalid(errors));
        }

        let mut specs = draft.to_specs(project_id);
        specs.updated_at = Some(Local::now().date_naive());

        self.specs
            .write()
            .await
            .insert(project_id.to_string(), specs.clone());
        tracing::info!("Shutter specs updated for project {}", project_id);

        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_project::repository::{seed_projects, seed_shutter_specs};

    fn service() -> InMemoryProjectService {
        InMemoryProjectService::new(seed_projects(), seed_shutter_specs())
    }

    #[tokio::test]
    async fn test_get_project() {
        let service = service();
        assert_eq!(service.get_projects().await.unwrap().len(), 5);
        assert_eq!(service.get_project("prj-002").await.unwrap().name, "Kapoor Bungalow Interiors");
        assert!(matches!(
            service.get_project("prj-404").await,
            Err(ProjectServiceError::ProjectNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_specs() {
        let result = service().get_shutter_specs("prj-004").await;
        assert!(matches!(result, Err(ProjectServiceError::SpecsNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_specs() {
        let service = service();
        let current = service.get_shutter_specs("prj-002").await.unwrap();
        let draft = ShutterSpecsDraft {
            quantity: 24.0,
            ..ShutterSpecsDraft::from_specs(&current)
        };

        let updated = service.update_shutter_specs("prj-002", draft).await.unwrap();
        assert_eq!(updated.quantity, 24);
        assert!(updated.updated_at.is_some());
        assert_eq!(service.get_shutter_specs("prj-002").await.unwrap().quantity, 24);
    }

    #[tokio::test]
    async fn test_update_creates_specs_for_new_project() {
        let service = service();
        let draft = ShutterSpecsDraft {
            shutter_type: "Flush".into(),
            material: "MDF".into(),
            finish: String::new(),
            width_mm: 600.0,
            height_mm: 700.0,
            quantity: 12.0,
            notes: String::new(),
        };
        service.update_shutter_specs("prj-004", draft).await.unwrap();
        assert!(service.get_shutter_specs("prj-004").await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected_and_not_stored() {
        let service = service();
        let current = service.get_shutter_specs("prj-001").await.unwrap();
        let draft = ShutterSpecsDraft {
            material: "  ".into(),
            ..ShutterSpecsDraft::from_specs(&current)
        };

        match service.update_shutter_specs("prj-001", draft).await {
            Err(ProjectServiceError::Invalid(errors)) => {
                assert!(errors.get("material").is_some())
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(service.get_shutter_specs("prj-001").await.unwrap(), current);
    }
}
