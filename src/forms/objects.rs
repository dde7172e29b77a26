use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::association::OptionValue;
use crate::domain::object::{NewObject, UpdateObject};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, first_invalid_id, sanitize_inline_text};

/// Maximum length of the advantages and disadvantages texts.
const TEXT_MAX_LEN: u64 = 3000;
/// Maximum length of a custom option value.
const VALUE_MAX_LEN: u64 = 100;

/// Result type returned by the object form helpers.
pub type ObjectFormResult<T> = Result<T, ObjectFormError>;

/// Errors that can occur while processing object payloads.
#[derive(Debug, Error)]
pub enum ObjectFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("object name cannot be empty")]
    EmptyName,
    /// The comparison reference is not a UUID.
    #[error("invalid comparison id `{value}`")]
    InvalidComparisonId { value: String },
    /// A custom option reference is not a UUID.
    #[error("invalid custom option id `{value}`")]
    InvalidCustomOptionId { value: String },
}

/// Custom option value supplied with an object payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OptionValueForm {
    /// Identifier of the custom option.
    #[serde(rename = "id")]
    pub custom_option_id: String,
    #[validate(length(min = 1, max = VALUE_MAX_LEN))]
    pub value: String,
}

/// Payload accepted when creating an object.
#[derive(Debug, Deserialize, Validate)]
pub struct AddObjectForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(range(min = 1, max = 10))]
    pub rating: i32,
    #[serde(default, rename = "advs")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub advantages: String,
    #[serde(default, rename = "disadvs")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub disadvantages: String,
    pub comparison_id: String,
    #[serde(default)]
    pub custom_options: Vec<OptionValueForm>,
}

impl AddObjectForm {
    /// Validates and sanitizes the payload into a domain `NewObject`.
    pub fn into_new_object(self) -> ObjectFormResult<NewObject> {
        self.validate()?;

        if uuid::Uuid::parse_str(&self.comparison_id).is_err() {
            return Err(ObjectFormError::InvalidComparisonId {
                value: self.comparison_id,
            });
        }

        let name = sanitized_name(&self.name)?;
        let options = into_option_values(self.custom_options)?;

        Ok(NewObject {
            name,
            rating: self.rating,
            advantages: self.advantages.trim().to_string(),
            disadvantages: self.disadvantages.trim().to_string(),
            comparison_id: self.comparison_id,
            options,
        })
    }
}

/// Payload accepted when updating an object. Comparison and photo cannot be changed here.
#[derive(Debug, Deserialize, Validate)]
pub struct EditObjectForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    #[validate(range(min = 1, max = 10))]
    pub rating: i32,
    #[serde(default, rename = "advs")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub advantages: String,
    #[serde(default, rename = "disadvs")]
    #[validate(length(max = TEXT_MAX_LEN))]
    pub disadvantages: String,
    #[serde(default)]
    pub custom_options: Vec<OptionValueForm>,
}

impl EditObjectForm {
    /// Validates and sanitizes the payload into a domain `UpdateObject`.
    pub fn into_update_object(self) -> ObjectFormResult<UpdateObject> {
        self.validate()?;

        let name = sanitized_name(&self.name)?;
        let options = into_option_values(self.custom_options)?;

        Ok(UpdateObject {
            name,
            rating: self.rating,
            advantages: self.advantages.trim().to_string(),
            disadvantages: self.disadvantages.trim().to_string(),
            options,
        })
    }
}

fn sanitized_name(raw: &str) -> ObjectFormResult<String> {
    let name = sanitize_inline_text(raw);
    if name.is_empty() {
        return Err(ObjectFormError::EmptyName);
    }
    Ok(name)
}

fn into_option_values(forms: Vec<OptionValueForm>) -> ObjectFormResult<Vec<OptionValue>> {
    for form in &forms {
        form.validate()?;
    }

    if let Some(value) = first_invalid_id(forms.iter().map(|form| &form.custom_option_id)) {
        return Err(ObjectFormError::InvalidCustomOptionId {
            value: value.to_string(),
        });
    }

    Ok(forms
        .into_iter()
        .map(|form| OptionValue::new(form.custom_option_id, form.value))
        .collect())
}

/// Image formats accepted for object photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Jpeg,
    Png,
}

impl PhotoFormat {
    const JPEG_MAGIC: &'static [u8] = &[0xFF, 0xD8, 0xFF];
    const PNG_MAGIC: &'static [u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    /// Detect the format from the leading bytes of a file.
    pub fn sniff(header: &[u8]) -> Option<Self> {
        if header.starts_with(Self::JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else if header.starts_with(Self::PNG_MAGIC) {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// File extension (with the leading dot) stored photos get. The client
    /// file name is ignored.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => ".jpg",
            Self::Png => ".png",
        }
    }
}

/// Errors raised while inspecting an uploaded photo.
#[derive(Debug, Error)]
pub enum PhotoFormError {
    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid photo format, must be image/jpeg or image/png")]
    UnsupportedFormat,
}

#[derive(MultipartForm)]
/// Multipart form for uploading an object photo.
pub struct UploadPhotoForm {
    /// Uploaded JPEG or PNG image.
    pub photo: TempFile,
}

impl UploadPhotoForm {
    /// Sniff the image format and rewind the file for copying.
    pub fn photo_format(&mut self) -> Result<PhotoFormat, PhotoFormError> {
        let file = self.photo.file.as_file_mut();
        file.rewind()?;

        let mut header = Vec::with_capacity(8);
        file.by_ref().take(8).read_to_end(&mut header)?;
        file.rewind()?;

        PhotoFormat::sniff(&header).ok_or(PhotoFormError::UnsupportedFormat)
    }
}
