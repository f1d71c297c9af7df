//! Add-experience request model.

use devfolio_commons::{EntryId, Experience};
use serde::Deserialize;

use crate::validation::{FieldError, Rules};

/// Request body for appending an experience entry.
#[derive(Debug, Default, Deserialize)]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    /// Check the required fields.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .not_empty("title", self.title.as_deref(), "Title is required")
            .not_empty("company", self.company.as_deref(), "Company is required")
            .not_empty("from", self.from.as_deref(), "From date is required")
            .collect()
    }

    /// Build the entry, assigning it a fresh id.
    ///
    /// Call only after `validate` has passed; the required fields fall
    /// back to empty strings rather than panicking.
    pub fn to_entry(&self) -> Experience {
        Experience {
            id: EntryId::generate(),
            title: self.title.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
            location: self.location.clone(),
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone(),
            current: self.current,
            description: self.description.clone(),
        }
    }
}
