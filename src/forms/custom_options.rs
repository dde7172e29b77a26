use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::custom_option::{NewCustomOption, UpdateCustomOption};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the custom option form helpers.
pub type CustomOptionFormResult<T> = Result<T, CustomOptionFormError>;

/// Errors that can occur while processing custom option payloads.
#[derive(Debug, Error)]
pub enum CustomOptionFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("custom option name cannot be empty")]
    EmptyName,
}

/// Payload accepted when creating or renaming a custom option.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomOptionForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
}

impl CustomOptionForm {
    pub fn into_new_custom_option(self) -> CustomOptionFormResult<NewCustomOption> {
        Ok(NewCustomOption::new(self.sanitized_name()?))
    }

    pub fn into_update_custom_option(self) -> CustomOptionFormResult<UpdateCustomOption> {
        Ok(UpdateCustomOption {
            name: self.sanitized_name()?,
        })
    }

    fn sanitized_name(self) -> CustomOptionFormResult<String> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(CustomOptionFormError::EmptyName);
        }

        Ok(name)
    }
}
