//! Services coordinating repository calls behind the HTTP handlers.
//!
//! [`ProjectLifecycle`] owns the project state machine (active → deleted)
//! and the one-document-per-project invariant. [`DocumentService`] owns the
//! version-checked write.

pub mod documents;
pub mod projects;

pub use documents::DocumentService;
pub use projects::ProjectLifecycle;
