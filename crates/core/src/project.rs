//! Project naming rules.

use validator::ValidationError;

/// Entity label used in not-found errors and log fields.
pub const ENTITY: &str = "Project";

/// Minimum project name length, in characters.
pub const MIN_NAME_LEN: usize = 1;

/// Maximum project name length, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Validate a project name: between [`MIN_NAME_LEN`] and [`MAX_NAME_LEN`]
/// characters, with no NUL characters. Length is counted in Unicode scalar
/// values, not bytes.
///
/// Shaped as a `validator` custom function so DTOs can reference it from
/// `#[validate(custom(...))]`.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    reject_nul(name)?;

    let len = name.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Ok(());
    }

    let mut err = ValidationError::new("length");
    err.message = Some(
        format!("must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters").into(),
    );
    err.add_param("min".into(), &MIN_NAME_LEN);
    err.add_param("max".into(), &MAX_NAME_LEN);
    err.add_param("actual".into(), &len);
    Err(err)
}

/// Postgres text columns cannot store U+0000.
pub(crate) fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if !value.contains('\0') {
        return Ok(());
    }
    let mut err = ValidationError::new("nul_character");
    err.message = Some("must not contain NUL characters".into());
    Err(err)
}
