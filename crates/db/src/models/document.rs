//! Document entity model and DTOs.

use mdedit_core::types::{DbId, Timestamp, Version};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub content_md: String,
    pub version: Version,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body of a document write. The expected version travels separately in the
/// `X-Document-Version` header. A missing `contentMd` clears the document.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocument {
    #[serde(default)]
    #[validate(custom(function = "mdedit_core::document::validate_content"))]
    pub content_md: String,
}
