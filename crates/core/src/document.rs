//! Document versioning rules.
//!
//! Every document carries a version counter that starts at
//! [`INITIAL_VERSION`] and advances by exactly one per accepted write. A
//! writer must echo the version it last read; the store applies the write
//! only if that version is still current.

use validator::ValidationError;

use crate::error::CoreError;
use crate::types::{DbId, Version};

/// Entity label used in not-found errors and log fields.
pub const ENTITY: &str = "Document";

/// Header carrying the expected version on writes and the new version on
/// responses.
pub const VERSION_HEADER: &str = "x-document-version";

/// Version of a freshly provisioned document.
pub const INITIAL_VERSION: Version = 1;

/// Message returned when a write is rejected because of a stale version.
pub const CONFLICT_MESSAGE: &str = "The document has been modified by another session";

/// Parse the expected version supplied alongside a write.
///
/// Rejects a missing value, anything that is not an integer, and negative
/// integers. These are malformed requests, never conflicts.
pub fn parse_expected_version(raw: Option<&str>) -> Result<Version, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("X-Document-Version header is required".into()))?;

    let version: Version = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid version number: {raw}")))?;

    if version < 0 {
        return Err(CoreError::Validation(format!(
            "Version must be non-negative, got {version}"
        )));
    }

    Ok(version)
}

/// Validate document content. Any text is accepted except NUL characters,
/// which the store cannot hold.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    crate::project::reject_nul(content)
}

/// Explain why a conditional write touched no rows.
///
/// `current` is the version observed for `id` after the write failed: `None`
/// means the document is not visible at all.
pub fn rejected_write_error(id: DbId, current: Option<Version>) -> CoreError {
    match current {
        None => CoreError::NotFound { entity: ENTITY, id },
        Some(_) => CoreError::Conflict(CONFLICT_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_expected_version(Some("7")).unwrap(), 7);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_expected_version(Some(" 3 ")).unwrap(), 3);
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(parse_expected_version(Some("0")).unwrap(), 0);
    }

    #[test]
    fn missing_header_rejected() {
        assert!(matches!(
            parse_expected_version(None),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            parse_expected_version(Some("  ")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn non_numeric_rejected() {
        assert!(matches!(
            parse_expected_version(Some("abc")),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            parse_expected_version(Some("1.5")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn negative_rejected() {
        assert!(matches!(
            parse_expected_version(Some("-1")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn overflowing_value_rejected() {
        assert!(matches!(
            parse_expected_version(Some("99999999999")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn missing_document_is_not_found() {
        let id = DbId::new_v4();
        assert!(matches!(
            rejected_write_error(id, None),
            CoreError::NotFound { entity: "Document", id: found } if found == id
        ));
    }

    #[test]
    fn existing_document_is_conflict() {
        let err = rejected_write_error(DbId::new_v4(), Some(4));
        assert!(matches!(err, CoreError::Conflict(ref m) if m == CONFLICT_MESSAGE));
    }

    #[test]
    fn markdown_content_is_valid() {
        assert!(validate_content("").is_ok());
        assert!(validate_content("# Title\n\n- item\twith tab").is_ok());
    }

    #[test]
    fn nul_in_content_rejected() {
        let err = validate_content("x\0y").unwrap_err();
        assert_eq!(err.code, "nul_character");
    }
}
