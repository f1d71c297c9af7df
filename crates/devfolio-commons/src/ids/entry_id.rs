//! Identifier for embedded experience/education entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single experience or education entry embedded in a
/// profile. Assigned when the entry is inserted and used for later
/// removal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an existing id string.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh entry id.
    pub fn generate() -> Self {
        Self(super::generate_id("ent"))
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
