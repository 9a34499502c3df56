//! Repository for the `documents` table.
//!
//! Documents are never deleted. Every query joins the owning project and
//! requires it to be active, so a soft-deleted project's document is
//! invisible even though the row survives.

use mdedit_core::document::INITIAL_VERSION;
use mdedit_core::types::{DbId, Version};
use sqlx::{PgConnection, PgPool};

use crate::models::document::Document;

/// Column list for statements that do not alias the table.
const COLUMNS: &str = "id, project_id, content_md, version, created_at, updated_at";

/// Column list qualified with the `d` alias used by the joined queries.
const JOINED_COLUMNS: &str =
    "d.id, d.project_id, d.content_md, d.version, d.created_at, d.updated_at";

/// Provides the read and version-checked write paths for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Provision the empty document owned by `project_id`.
    pub async fn insert_initial(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, content_md, version)
             VALUES ($1, '', $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .bind(INITIAL_VERSION)
            .fetch_one(conn)
            .await
    }

    /// Find a document by its own ID. `None` if missing or its project is deleted.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM documents d
             INNER JOIN projects p ON p.id = d.project_id
             WHERE d.id = $1 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the document owned by an active project.
    pub async fn find_by_project_id(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM documents d
             INNER JOIN projects p ON p.id = d.project_id
             WHERE d.project_id = $1 AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Current version of a visible document, or `None` if it is not visible.
    pub async fn current_version(pool: &PgPool, id: DbId) -> Result<Option<Version>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT d.version
             FROM documents d
             INNER JOIN projects p ON p.id = d.project_id
             WHERE d.id = $1 AND p.deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Replace the content and bump the version, but only if the stored
    /// version still equals `expected_version`.
    ///
    /// The check and the write are one statement, so concurrent callers
    /// holding the same `expected_version` cannot both succeed: PostgreSQL
    /// serializes the row update and re-evaluates the predicate for the
    /// loser, which then matches nothing.
    ///
    /// Returns `None` when no row matched. Use
    /// [`DocumentRepo::current_version`] to tell a stale version from a
    /// missing document.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content_md: &str,
        expected_version: Version,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!(
            "UPDATE documents d
             SET content_md = $2, version = d.version + 1, updated_at = NOW()
             FROM projects p
             WHERE d.id = $1
               AND d.version = $3
               AND p.id = d.project_id
               AND p.deleted_at IS NULL
             RETURNING {JOINED_COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(content_md)
            .bind(expected_version)
            .fetch_optional(pool)
            .await
    }
}
