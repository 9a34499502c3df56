//! Repository for the `projects` table.

use mdedit_core::pagination::PageRequest;
use mdedit_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::document::Document;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::DocumentRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at, deleted_at";

/// Provides CRUD operations for projects. Every read and write filters on
/// `deleted_at IS NULL`, so soft-deleted projects behave as absent.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project and provision its empty document in one transaction.
    ///
    /// Either both rows exist afterwards or neither does: any failure rolls
    /// the transaction back when `tx` is dropped.
    pub async fn create_with_document(
        pool: &PgPool,
        input: &CreateProject,
    ) -> Result<(Project, Document), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project = Self::insert(&mut *tx, input).await?;
        let document = DocumentRepo::insert_initial(&mut *tx, project.id).await?;

        tx.commit().await?;
        Ok((project, document))
    }

    /// Insert a bare project row. Only valid inside the transaction of
    /// [`ProjectRepo::create_with_document`], which provisions the document.
    async fn insert(
        conn: &mut PgConnection,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!("INSERT INTO projects (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .fetch_one(conn)
            .await
    }

    /// Find an active project by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active projects, most recently created first.
    pub async fn list(pool: &PgPool, page: &PageRequest) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Count active projects.
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await
    }

    /// Rename an active project and refresh `updated_at`.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET name = $2, updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a project by ID. Returns `true` if a row was marked deleted.
    ///
    /// `deleted_at` and `updated_at` receive the same timestamp. Already
    /// deleted or missing rows return `false`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET deleted_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
