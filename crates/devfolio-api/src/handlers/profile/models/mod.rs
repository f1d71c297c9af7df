//! Profile request and response models.
//!
//! This module contains type-safe models for all profile endpoints.

mod education_request;
mod experience_request;
mod message_response;
mod profile_view;
mod upsert_request;

pub use education_request::EducationRequest;
pub use experience_request::ExperienceRequest;
pub use message_response::{MessageResponse, ValidationErrorResponse};
pub use profile_view::{ProfileView, UserSummary};
pub use upsert_request::UpsertProfileRequest;
