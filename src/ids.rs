use uuid::Uuid;

/// Source of globally unique entity identifiers.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Generates random UUID v4 identifiers in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
