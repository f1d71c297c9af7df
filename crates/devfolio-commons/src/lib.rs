// Devfolio Commons
//
// Shared building blocks used across all Devfolio crates:
// type-safe identifiers, domain models, and common error types.

pub mod errors;
pub mod ids;
pub mod models;

pub use errors::{CommonError, Result};
pub use ids::{EntryId, PostId, UserId};
pub use models::{
    parse_skills, Education, Experience, Post, Profile, ProfileUpdate, SocialLinks, User,
};
