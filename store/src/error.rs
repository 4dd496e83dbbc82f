//! Storage error types.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An element with this name is already stored.
    #[error("Duplicate element name: {0}")]
    DuplicateElement(String),

    /// No element with this name is stored.
    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
