//! Document reads and the version-checked write.

use mdedit_core::document::{rejected_write_error, ENTITY};
use mdedit_core::error::CoreError;
use mdedit_core::types::{DbId, Version};
use mdedit_db::models::document::{Document, UpdateDocument};
use mdedit_db::repositories::DocumentRepo;
use mdedit_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Serves document reads and optimistic-concurrency writes.
///
/// Holds no locks: the compare-and-swap on `version` happens inside a single
/// `UPDATE` statement, so correctness does not depend on this process being
/// the only writer.
pub struct DocumentService {
    pool: DbPool,
}

impl DocumentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: DbId) -> AppResult<Document> {
        DocumentRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))
    }

    /// Replace the content of `id` if its version is still `expected_version`.
    ///
    /// Invalid content is rejected before the store is touched. On success
    /// the returned document carries the new version (`expected_version + 1`).
    /// When the write matches nothing, a follow-up read decides between
    /// not-found (document missing or its project deleted) and conflict
    /// (someone else advanced the version first).
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateDocument,
        expected_version: Version,
    ) -> AppResult<Document> {
        input.validate()?;

        if let Some(document) =
            DocumentRepo::update_content(&self.pool, id, &input.content_md, expected_version)
                .await?
        {
            tracing::debug!(
                document_id = %id,
                version = document.version,
                "Document updated"
            );
            return Ok(document);
        }

        let current = DocumentRepo::current_version(&self.pool, id).await?;
        if let Some(current_version) = current {
            tracing::warn!(
                document_id = %id,
                expected_version,
                current_version,
                "Rejected stale document write"
            );
        }
        Err(rejected_write_error(id, current).into())
    }
}
