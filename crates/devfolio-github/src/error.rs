//! Error types for the GitHub lookup client.

use thiserror::Error;

/// Result type for GitHub lookup operations.
pub type Result<T> = std::result::Result<T, GithubError>;

/// Errors raised by the GitHub lookup client.
#[derive(Error, Debug)]
pub enum GithubError {
    /// The request could not be completed (DNS, connect, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("github responded with status {status}")]
    Status { status: u16 },

    /// The response body was not valid JSON
    #[error("failed to decode github response: {0}")]
    Decode(String),

    /// The client was misconfigured
    #[error("configuration error: {0}")]
    Configuration(String),
}
