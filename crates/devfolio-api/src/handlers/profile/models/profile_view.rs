//! The identity-joined profile view returned by read endpoints.

use chrono::{DateTime, Utc};
use devfolio_commons::{Education, Experience, Profile, SocialLinks, User, UserId};
use serde::Serialize;

/// Identity display fields projected into a profile view.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// A profile document joined with its identity's display fields.
///
/// `user` is `null` when the identity record no longer exists; the
/// profile itself is still served.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub user: Option<UserSummary>,
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
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    /// Build the joined view from a profile and its (possibly missing)
    /// identity record.
    pub fn new(profile: Profile, user: Option<&User>) -> Self {
        Self {
            user: user.map(UserSummary::from),
            status: profile.status,
            skills: profile.skills,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
