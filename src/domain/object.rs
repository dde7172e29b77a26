use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::association::{Association, OptionValue};

/// Catalog entry belonging to exactly one comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Object {
    /// Server-assigned identifier, immutable after creation.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Score between 1 and 10.
    pub rating: i32,
    /// Creation timestamp, immutable after creation.
    pub created_at: NaiveDateTime,
    /// Free-form advantages text.
    pub advantages: String,
    /// Free-form disadvantages text.
    pub disadvantages: String,
    /// Location of the uploaded photo; only changed by the photo operation.
    pub photo_path: Option<String>,
    /// Owning comparison, immutable after creation.
    pub comparison_id: String,
    /// Custom option values attached to the object.
    pub associations: Vec<Association>,
}

/// Payload required to create an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewObject {
    pub name: String,
    pub rating: i32,
    pub advantages: String,
    pub disadvantages: String,
    pub comparison_id: String,
    pub options: Vec<OptionValue>,
}

impl NewObject {
    /// Build a payload with empty texts and no custom option values.
    pub fn new(name: impl Into<String>, rating: i32, comparison_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            advantages: String::new(),
            disadvantages: String::new(),
            comparison_id: comparison_id.into(),
            options: Vec::new(),
        }
    }

    pub fn with_advantages(mut self, advantages: impl Into<String>) -> Self {
        self.advantages = advantages.into();
        self
    }

    pub fn with_disadvantages(mut self, disadvantages: impl Into<String>) -> Self {
        self.disadvantages = disadvantages.into();
        self
    }

    pub fn with_option(mut self, option: OptionValue) -> Self {
        self.options.push(option);
        self
    }
}

/// Fields of an object accepted by the generic update path.
///
/// Identifier, creation time, comparison and photo path are carried over
/// from the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateObject {
    pub name: String,
    pub rating: i32,
    pub advantages: String,
    pub disadvantages: String,
    pub options: Vec<OptionValue>,
}
