use serde::{Deserialize, Serialize};

/// Reusable attribute definition (for example "Speed") attached to objects with a value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomOption {
    /// Server-assigned identifier, immutable after creation.
    pub id: String,
    /// Unique human-readable name.
    pub name: String,
}

/// Payload required to create a custom option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomOption {
    pub name: String,
}

impl NewCustomOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Patch data applied when renaming a custom option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCustomOption {
    pub name: String,
}
