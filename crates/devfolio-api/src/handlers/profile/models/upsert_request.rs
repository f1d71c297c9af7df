//! Upsert profile request model.

use devfolio_commons::{parse_skills, ProfileUpdate};
use serde::Deserialize;

use crate::validation::{FieldError, Rules};

/// Request body for creating or updating the caller's profile.
///
/// Every field is optional at the type level; which fields are required
/// is the validation rule set's concern. Fields absent from the request
/// are never written to the stored document.
#[derive(Debug, Default, Deserialize)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    /// Comma-delimited list, e.g. `"Rust, SQL, HTML"`.
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    /// Check the required fields.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .not_empty("status", self.status.as_deref(), "Status is required")
            .not_empty("skills", self.skills.as_deref(), "Skills is required")
            .collect()
    }

    /// Build the partial update record from the supplied fields.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            company: self.company.clone(),
            website: self.website.clone(),
            location: self.location.clone(),
            bio: self.bio.clone(),
            status: self.status.clone(),
            githubusername: self.githubusername.clone(),
            skills: self.skills.as_deref().map(parse_skills),
            youtube: self.youtube.clone(),
            twitter: self.twitter.clone(),
            facebook: self.facebook.clone(),
            linkedin: self.linkedin.clone(),
            instagram: self.instagram.clone(),
        }
    }
}
