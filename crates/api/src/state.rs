use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{DocumentService, ProjectLifecycle};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing here is mutated per request: all coordination happens in the
/// database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mdedit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Project create/list/rename/delete and project-scoped document lookup.
    pub projects: Arc<ProjectLifecycle>,
    /// Document reads and version-checked writes.
    pub documents: Arc<DocumentService>,
}

impl AppState {
    /// Wire the services around a pool.
    pub fn new(pool: mdedit_db::DbPool, config: ServerConfig) -> Self {
        Self {
            projects: Arc::new(ProjectLifecycle::new(pool.clone())),
            documents: Arc::new(DocumentService::new(pool.clone())),
            config: Arc::new(config),
            pool,
        }
    }
}
