//! Type-safe wrapper for user identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CommonError;

/// Maximum accepted length for a user identifier.
const MAX_USER_ID_LENGTH: usize = 64;

/// Type-safe wrapper for user identifiers.
///
/// Ensures user ids cannot be accidentally used where entry or post ids
/// are expected, and rejects ids whose shape the store would never have
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from a string.
    ///
    /// # Panics
    /// Panics if the id fails validation. Use `try_new()` for fallible
    /// creation from untrusted input.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self::try_new(id).expect("UserId contains invalid characters")
    }

    /// Creates a new UserId from a string, returning an error if
    /// validation fails.
    ///
    /// A valid id is non-empty, at most 64 characters, and consists of
    /// ASCII alphanumerics, `_`, or `-` only. Path parameters that fail
    /// this check could never name a stored identity, which lets callers
    /// treat a malformed id the same as an unknown one.
    pub fn try_new(id: impl Into<String>) -> Result<Self, CommonError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), CommonError> {
        if id.is_empty() {
            return Err(CommonError::invalid_input("User id cannot be empty"));
        }
        if id.len() > MAX_USER_ID_LENGTH {
            return Err(CommonError::invalid_input(format!(
                "User id exceeds maximum length of {} characters",
                MAX_USER_ID_LENGTH
            )));
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(CommonError::invalid_input(
                "User id may only contain ASCII alphanumerics, '_' or '-'",
            ));
        }
        Ok(())
    }

    /// Generate a fresh user id.
    pub fn generate() -> Self {
        Self(super::generate_id("usr"))
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids() {
        assert!(UserId::try_new("usr_18f3a2c40001").is_ok());
        assert!(UserId::try_new("alice-01").is_ok());
    }

    #[test]
    fn rejects_empty_id() {
        assert!(UserId::try_new("").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(UserId::try_new("a/b").is_err());
        assert!(UserId::try_new("a b").is_err());
        assert!(UserId::try_new("..").is_err());
        assert!(UserId::try_new("caf\u{e9}").is_err());
    }

    #[test]
    fn rejects_overlong_id() {
        let long = "a".repeat(65);
        assert!(UserId::try_new(long).is_err());
    }

    #[test]
    fn generated_ids_validate() {
        let id = UserId::generate();
        assert!(UserId::try_new(id.as_str()).is_ok());
    }
}
