//! The identity record: the authenticated user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// An authenticated user account.
///
/// Identities are owned by a collaborator outside this service; the
/// profile API only reads them for display joins and deletes them during
/// the account removal cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl User {
    /// Create a user record with a fresh id and the current timestamp.
    pub fn new(name: impl Into<String>, email: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            avatar,
            date: Utc::now(),
        }
    }
}
