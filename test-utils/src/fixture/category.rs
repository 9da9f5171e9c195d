//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category name.
pub const DEFAULT_NAME: &str = "gaming";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"gaming"`
/// - description: `None`
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        description: None,
    }
}

/// Creates a category entity model with the given id and name.
pub fn entity_named(id: i32, name: impl Into<String>) -> category::Model {
    category::Model {
        id,
        name: name.into(),
        description: None,
    }
}
