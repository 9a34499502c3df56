//! Project entity model and DTOs.

use mdedit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Always `None` for rows returned by the active-only queries.
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(custom(function = "mdedit_core::project::validate_name"))]
    pub name: String,
}

/// DTO for renaming an existing project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(custom(function = "mdedit_core::project::validate_name"))]
    pub name: String,
}

/// One page of active projects plus the pagination actually applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    /// Number of active projects across all pages.
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
}
