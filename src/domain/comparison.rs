use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Named grouping of objects that are compared against each other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comparison {
    /// Server-assigned identifier, immutable after creation.
    pub id: String,
    /// Unique human-readable name.
    pub name: String,
    /// Creation timestamp, immutable after creation.
    pub created_at: NaiveDateTime,
    /// Custom options applicable to objects of this comparison, in display order.
    pub custom_option_ids: Vec<String>,
}

/// Payload required to create a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComparison {
    pub name: String,
    pub custom_option_ids: Vec<String>,
}

impl NewComparison {
    /// Build a payload with no custom options attached.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            custom_option_ids: Vec::new(),
        }
    }

    /// Attach the ordered list of custom option identifiers.
    pub fn with_custom_option_ids(mut self, ids: impl Into<Vec<String>>) -> Self {
        self.custom_option_ids = ids.into();
        self
    }
}

/// Mutable part of a comparison accepted by the update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateComparison {
    pub name: String,
    pub custom_option_ids: Vec<String>,
}
