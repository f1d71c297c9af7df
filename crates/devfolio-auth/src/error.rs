//! Authentication error types.

use thiserror::Error;

/// Result type for authentication operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Errors raised while authenticating a request.
///
/// Every variant maps to HTTP 401 at the API layer; the variants exist
/// so callers and logs can tell a missing header from a bad token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header was supplied
    #[error("Missing authorization: {0}")]
    MissingAuthorization(String),

    /// The Authorization header could not be parsed
    #[error("Malformed authorization: {0}")]
    MalformedAuthorization(String),

    /// The token failed signature, issuer, or claim validation
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token has expired
    #[error("Token expired")]
    Expired,

    /// Unexpected internal failure
    #[error("Internal auth error: {0}")]
    Internal(String),
}
