//! User domain models and parameters.
//!
//! Users are created or refreshed on every Discord login. Their local integer ID
//! is what sessions and server memberships reference.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user backed by a Discord identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Local primary key.
    pub id: i32,
    /// Discord snowflake of the user, kept as received.
    pub discord_id: String,
    /// Display name of the user.
    pub name: String,
    /// When the user first logged in.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            discord_id: self.discord_id,
            name: self.name,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user after a successful Discord login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord snowflake of the user.
    pub discord_id: String,
    /// Display name of the user.
    pub name: String,
}
