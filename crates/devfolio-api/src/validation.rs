//! Request body validation.
//!
//! The validation collaborator: mutating handlers compose a rule set
//! over their request body and bail out with the collected field errors
//! before touching any store.

use serde::Serialize;

/// A single failed validation, shaped for the error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub param: String,
    pub location: String,
}

/// Composable required-field rules.
///
/// # Examples
///
/// ```
/// use devfolio_api::validation::Rules;
///
/// let result = Rules::new()
///     .not_empty("status", Some("Developer"), "Status is required")
///     .not_empty("skills", None, "Skills is required")
///     .collect();
/// let errors = result.unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].param, "skills");
/// ```
#[derive(Debug, Default)]
pub struct Rules {
    errors: Vec<FieldError>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the field to be present and not blank.
    pub fn not_empty(mut self, param: &str, value: Option<&str>, msg: &str) -> Self {
        let missing = value.map(|v| v.trim().is_empty()).unwrap_or(true);
        if missing {
            self.errors.push(FieldError {
                msg: msg.to_string(),
                param: param.to_string(),
                location: "body".to_string(),
            });
        }
        self
    }

    /// Finish the rule set: `Ok` when every rule passed, otherwise the
    /// failures in rule order.
    pub fn collect(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
