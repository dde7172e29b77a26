use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::comparison::{NewComparison, UpdateComparison};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, first_invalid_id, sanitize_inline_text};

/// Result type returned by the comparison form helpers.
pub type ComparisonFormResult<T> = Result<T, ComparisonFormError>;

/// Errors that can occur while processing comparison payloads.
#[derive(Debug, Error)]
pub enum ComparisonFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("comparison name cannot be empty")]
    EmptyName,
    /// A custom option reference is not a UUID.
    #[error("invalid custom option id `{value}`")]
    InvalidCustomOptionId { value: String },
}

/// Payload accepted when creating or updating a comparison.
#[derive(Debug, Deserialize, Validate)]
pub struct ComparisonForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Ordered custom option identifiers; absent means none.
    #[serde(default)]
    pub custom_option_ids: Vec<String>,
}

impl ComparisonForm {
    /// Validates and sanitizes the payload into a domain `NewComparison`.
    pub fn into_new_comparison(self) -> ComparisonFormResult<NewComparison> {
        let (name, custom_option_ids) = self.into_parts()?;
        Ok(NewComparison::new(name).with_custom_option_ids(custom_option_ids))
    }

    /// Validates and sanitizes the payload into a domain `UpdateComparison`.
    pub fn into_update_comparison(self) -> ComparisonFormResult<UpdateComparison> {
        let (name, custom_option_ids) = self.into_parts()?;
        Ok(UpdateComparison {
            name,
            custom_option_ids,
        })
    }

    fn into_parts(self) -> ComparisonFormResult<(String, Vec<String>)> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ComparisonFormError::EmptyName);
        }

        if let Some(value) = first_invalid_id(&self.custom_option_ids) {
            return Err(ComparisonFormError::InvalidCustomOptionId {
                value: value.to_string(),
            });
        }

        Ok((name, self.custom_option_ids))
    }
}
