//! Add-education request model.

use devfolio_commons::{Education, EntryId};
use serde::Deserialize;

use crate::validation::{FieldError, Rules};

/// Request body for appending an education entry.
#[derive(Debug, Default, Deserialize)]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    /// Check the required fields.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        Rules::new()
            .not_empty("school", self.school.as_deref(), "School is required")
            .not_empty("degree", self.degree.as_deref(), "Degree is required")
            .not_empty(
                "fieldofstudy",
                self.fieldofstudy.as_deref(),
                "Fieldofstudy is required",
            )
            .not_empty("from", self.from.as_deref(), "From date is required")
            .collect()
    }

    /// Build the entry, assigning it a fresh id.
    ///
    /// Call only after `validate` has passed; the required fields fall
    /// back to empty strings rather than panicking.
    pub fn to_entry(&self) -> Education {
        Education {
            id: EntryId::generate(),
            school: self.school.clone().unwrap_or_default(),
            degree: self.degree.clone().unwrap_or_default(),
            fieldofstudy: self.fieldofstudy.clone().unwrap_or_default(),
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone(),
            current: self.current,
            description: self.description.clone(),
        }
    }
}
