//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` input DTOs, validated with `validator` where the input
//!   carries constraints

pub mod document;
pub mod project;
