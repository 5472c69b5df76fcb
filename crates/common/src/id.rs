//! ID generation utilities.

use uuid::Uuid;

/// ID generator for entities.
///
/// Catalog entities use random UUID v4 primary keys: identifiers must be
/// stable and must not reveal insertion order.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    _private: (),
}

impl IdGenerator {
    /// Create a new ID generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generate a new UUID v4-based entity ID.
    #[must_use]
    pub fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
