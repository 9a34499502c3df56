//! Handlers for the `/documents` resource.
//!
//! The document version travels in the `X-Document-Version` header: clients
//! send the version they last read, and every successful response carries
//! the current one so the next write can be issued without re-fetching.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::Json;
use mdedit_core::document::{parse_expected_version, VERSION_HEADER};
use mdedit_core::types::{DbId, Version};
use mdedit_db::models::document::{Document, UpdateDocument};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response headers carrying the document version.
pub(crate) type VersionHeaders = [(HeaderName, HeaderValue); 1];

pub(crate) fn version_headers(version: Version) -> VersionHeaders {
    [(HeaderName::from_static(VERSION_HEADER), HeaderValue::from(version))]
}

/// GET /api/documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(VersionHeaders, Json<Document>)> {
    let document = state.documents.get(id).await?;
    Ok((version_headers(document.version), Json(document)))
}

/// PUT /api/documents/{id}
///
/// Requires `X-Document-Version`. Returns 409 when the version is stale and
/// 400 when it is missing or not a non-negative integer.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
    Json(input): Json<UpdateDocument>,
) -> AppResult<(VersionHeaders, Json<Document>)> {
    let raw = headers
        .get(VERSION_HEADER)
        .map(|v| {
            v.to_str()
                .map_err(|_| AppError::BadRequest("X-Document-Version must be ASCII".into()))
        })
        .transpose()?;
    let expected_version = parse_expected_version(raw)?;

    let document = state
        .documents
        .update(id, &input, expected_version)
        .await?;
    Ok((version_headers(document.version), Json(document)))
}
