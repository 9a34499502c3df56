//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or `&mut PgConnection` when the call must join a caller's
//! transaction) as the first argument.

pub mod document_repo;
pub mod project_repo;

pub use document_repo::DocumentRepo;
pub use project_repo::ProjectRepo;
