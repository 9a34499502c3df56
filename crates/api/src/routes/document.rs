//! Route definitions for the `/documents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (requires X-Document-Version)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(document::get_by_id).put(document::update))
}
