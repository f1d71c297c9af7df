//! Errors surfaced by store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document matched the given key
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unique constraint violation (one profile per identity)
    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock poisoning error (internal concurrency issue)
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    /// Other errors
    #[error("Internal store error: {0}")]
    Internal(String),
}
