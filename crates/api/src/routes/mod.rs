pub mod document;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get, update (PUT/PATCH), delete
/// /projects/{id}/document            owned document
///
/// /documents/{id}                    get, version-checked update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/documents", document::router())
}
