//! Server fixtures for creating in-memory test data.

use entity::server;

/// Default test server name.
pub const DEFAULT_NAME: &str = "Test Server";

/// Default owner ID for servers.
pub const DEFAULT_OWNER_ID: i32 = 1;

/// Default category ID for servers.
pub const DEFAULT_CATEGORY_ID: i32 = 1;

/// Creates a server entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Server"`
/// - owner_id: `1`
/// - category_id: `1`
/// - description: `None`
pub fn entity() -> server::Model {
    entity_with_id(1)
}

/// Creates a server entity model with default values and the given id.
pub fn entity_with_id(id: i32) -> server::Model {
    server::Model {
        id,
        name: DEFAULT_NAME.to_string(),
        owner_id: DEFAULT_OWNER_ID,
        category_id: DEFAULT_CATEGORY_ID,
        description: None,
    }
}
