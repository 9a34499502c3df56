//! Project lifecycle coordinator.

use mdedit_core::error::CoreError;
use mdedit_core::pagination::PageRequest;
use mdedit_core::project::ENTITY;
use mdedit_core::types::DbId;
use mdedit_db::models::document::Document;
use mdedit_db::models::project::{CreateProject, Project, ProjectPage, UpdateProject};
use mdedit_db::repositories::{DocumentRepo, ProjectRepo};
use mdedit_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Orchestrates project creation, listing, renaming and soft deletion.
///
/// Every lookup treats a soft-deleted project as absent. Deletion is
/// one-way: no operation here clears `deleted_at`.
pub struct ProjectLifecycle {
    pool: DbPool,
}

impl ProjectLifecycle {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a project together with its empty document (version 1).
    ///
    /// Both rows are written in one transaction. If provisioning the document
    /// fails the project insert is rolled back and the store error is
    /// returned; a project without a document is never left behind.
    pub async fn create(&self, input: &CreateProject) -> AppResult<(Project, Document)> {
        input.validate()?;

        let (project, document) = ProjectRepo::create_with_document(&self.pool, input)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, name = %input.name, "Project provisioning failed");
                AppError::Database(e)
            })?;

        tracing::info!(
            project_id = %project.id,
            document_id = %document.id,
            "Project created"
        );
        Ok((project, document))
    }

    /// One page of active projects, newest first, with the total count.
    pub async fn list(&self, page: PageRequest) -> AppResult<ProjectPage> {
        let total_count = ProjectRepo::count_active(&self.pool).await?;
        let projects = ProjectRepo::list(&self.pool, &page).await?;

        Ok(ProjectPage {
            projects,
            total_count,
            page: page.page,
            page_size: page.page_size,
        })
    }

    pub async fn get(&self, id: DbId) -> AppResult<Project> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Rename an active project.
    pub async fn rename(&self, id: DbId, input: &UpdateProject) -> AppResult<Project> {
        input.validate()?;

        ProjectRepo::update(&self.pool, id, input)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Soft-delete an active project. Deleting twice is a not-found.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !ProjectRepo::soft_delete(&self.pool, id).await? {
            return Err(not_found(id));
        }
        tracing::info!(project_id = %id, "Project soft-deleted");
        Ok(())
    }

    /// The document owned by an active project.
    ///
    /// Every active project owns a document, so a miss means the project
    /// itself is missing or deleted.
    pub async fn document(&self, project_id: DbId) -> AppResult<Document> {
        DocumentRepo::find_by_project_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| not_found(project_id))
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
