//! Posts authored by an identity.
//!
//! The profile API never serves posts; they exist here as the target of
//! the account-removal cascade, which deletes every post authored by the
//! departing identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PostId, UserId};

/// A post authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub user: UserId,
    pub text: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post with a fresh id and the current timestamp.
    pub fn new(user: UserId, text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PostId::generate(),
            user,
            text: text.into(),
            name: name.into(),
            avatar: None,
            date: Utc::now(),
        }
    }
}
