use serde::{Deserialize, Serialize};

/// Join record binding one object to one custom option with a concrete value.
///
/// At most one association exists per `(object_id, custom_option_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Association {
    pub object_id: String,
    pub custom_option_id: String,
    pub value: String,
}

impl Association {
    pub fn new(
        object_id: impl Into<String>,
        custom_option_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            custom_option_id: custom_option_id.into(),
            value: value.into(),
        }
    }
}

/// Custom option value supplied for an object that has not been stamped with
/// the owning object identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValue {
    pub custom_option_id: String,
    pub value: String,
}

impl OptionValue {
    pub fn new(custom_option_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            custom_option_id: custom_option_id.into(),
            value: value.into(),
        }
    }

    /// Bind the value to `object_id`, producing a storable association.
    pub fn for_object(self, object_id: &str) -> Association {
        Association {
            object_id: object_id.to_string(),
            custom_option_id: self.custom_option_id,
            value: self.value,
        }
    }
}
