//! Shared error types for Devfolio.
//!
//! This module provides the common error vocabulary used across all
//! Devfolio crates without introducing crate-specific dependencies.

use thiserror::Error;

/// Result type alias using [`CommonError`].
pub type Result<T> = std::result::Result<T, CommonError>;

/// Common error type for Devfolio operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found (user, profile, post, etc.)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (duplicate creation)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Internal error (unexpected state)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommonError {
    /// Creates an InvalidInput error with a message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a NotFound error with a message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Creates an AlreadyExists error with a message.
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    /// Creates an Internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
