//! Domain rules shared by the repository and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! identifier and timestamp aliases, and the pure normalization/validation
//! helpers for projects, documents and pagination.

pub mod document;
pub mod error;
pub mod pagination;
pub mod project;
pub mod types;
