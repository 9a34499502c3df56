//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters for `GET /projects` (`?page=&pageSize=`).
///
/// Kept as raw strings: unparsable values fall back to defaults instead of
/// failing extraction. Normalized by
/// [`PageRequest::from_raw`](mdedit_core::pagination::PageRequest::from_raw).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    pub page: Option<String>,
    #[serde(alias = "page_size")]
    pub page_size: Option<String>,
}
