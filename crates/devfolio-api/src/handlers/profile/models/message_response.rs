//! Plain-message and validation error response bodies.

use serde::Serialize;

use crate::validation::FieldError;

/// Response body carrying a single human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    /// Create a new message response.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Response body carrying per-field validation failures.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

impl ValidationErrorResponse {
    #[inline]
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}
