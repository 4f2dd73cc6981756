//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business rule failures raised before touching the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Store-level errors.
///
/// The in-memory store can only fail by being pointed at an id it does not
/// hold.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    NotFound(PostId),
}
