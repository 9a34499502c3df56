//! HTTP handlers. Thin adapters between axum extractors and the services.

pub mod document;
pub mod project;
