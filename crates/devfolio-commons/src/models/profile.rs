//! The profile document and its embedded records.
//!
//! A profile is the extended-attributes document associated 1:1 with an
//! identity. Experience and education entries are embedded, ordered
//! newest-first, and carry an [`EntryId`] assigned at insertion so they
//! can be removed individually later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{EntryId, UserId};

/// Optional social network links attached to a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// An employment history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An education history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: EntryId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The profile document. Exactly zero or one exists per identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user: UserId,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for the given identity.
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            status: String::new(),
            skills: Vec::new(),
            company: None,
            website: None,
            location: None,
            bio: None,
            githubusername: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }
}

/// Partial update record for a profile.
///
/// Carries only the fields the caller supplied; applying it assigns
/// exactly those fields and leaves every other field untouched. Literal
/// absence is the only skip condition — a supplied empty string IS
/// assigned.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<Vec<String>>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileUpdate {
    /// Apply the sparse merge to a profile document.
    pub fn apply(&self, profile: &mut Profile) {
        if let Some(v) = &self.company {
            profile.company = Some(v.clone());
        }
        if let Some(v) = &self.website {
            profile.website = Some(v.clone());
        }
        if let Some(v) = &self.location {
            profile.location = Some(v.clone());
        }
        if let Some(v) = &self.bio {
            profile.bio = Some(v.clone());
        }
        if let Some(v) = &self.status {
            profile.status = v.clone();
        }
        if let Some(v) = &self.githubusername {
            profile.githubusername = Some(v.clone());
        }
        if let Some(v) = &self.skills {
            profile.skills = v.clone();
        }
        if let Some(v) = &self.youtube {
            profile.social.youtube = Some(v.clone());
        }
        if let Some(v) = &self.twitter {
            profile.social.twitter = Some(v.clone());
        }
        if let Some(v) = &self.facebook {
            profile.social.facebook = Some(v.clone());
        }
        if let Some(v) = &self.linkedin {
            profile.social.linkedin = Some(v.clone());
        }
        if let Some(v) = &self.instagram {
            profile.social.instagram = Some(v.clone());
        }
    }
}

/// Normalize a comma-delimited skills string into an ordered list.
///
/// Each element is trimmed; empty segments are dropped.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
