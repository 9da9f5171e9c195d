//! Server domain models and listing parameters.
//!
//! `ServerFilter` is the validated form of the listing query. It is built once per
//! request from the raw `ServerListQuery` and the caller's identity, and is the only
//! input the listing pipeline in `service::server` needs.

use sea_orm::DbErr;

use crate::{
    model::server::{ServerDto, ServerListQuery},
    server::{
        error::{auth::AuthError, AppError},
        util::parse::{parse_flag, parse_quantity, parse_server_id},
    },
};

/// A server with its category name and membership set.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// Primary key.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// ID of the owning user.
    pub owner_id: i32,
    /// Name of the related category.
    pub category: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// IDs of the member users, ascending.
    pub members: Vec<i32>,
    /// Member count annotation, set only when the listing asked for it.
    pub num_members: Option<u64>,
}

impl Server {
    /// Converts entity models to a server domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `server` - Server row
    /// - `category` - Category row joined through `server.category_id`
    /// - `members` - Member user IDs of this server
    ///
    /// # Returns
    /// - `Ok(Server)` - Converted domain model without member count annotation
    /// - `Err(DbErr::RecordNotFound)` - Category row missing for this server
    pub fn from_entity(
        server: entity::server::Model,
        category: Option<entity::category::Model>,
        members: Vec<i32>,
    ) -> Result<Self, DbErr> {
        let category = category.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Category {} of server {} not found",
                server.category_id, server.id
            ))
        })?;

        Ok(Self {
            id: server.id,
            name: server.name,
            owner_id: server.owner_id,
            category: category.name,
            description: server.description,
            members,
            num_members: None,
        })
    }

    /// Converts the server to a DTO for API responses.
    ///
    /// # Arguments
    /// - `include_num_members` - Whether the `num_members` field is serialized
    pub fn into_dto(self, include_num_members: bool) -> ServerDto {
        let num_members = if include_num_members {
            Some(
                self.num_members
                    .unwrap_or_else(|| self.members.len() as u64),
            )
        } else {
            None
        };

        ServerDto {
            id: self.id,
            name: self.name,
            owner: self.owner_id,
            category: self.category,
            description: self.description,
            member: self.members,
            num_members,
        }
    }
}

/// Query narrowing pushed down to the database.
///
/// Each set field adds one condition; unset fields leave the query untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerQueryParam {
    /// Exact category name to match.
    pub category: Option<String>,
    /// Keep only servers this user is a member of.
    pub member_id: Option<i32>,
    /// Maximum number of servers to return.
    pub limit: Option<u64>,
}

/// Validated listing filter for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerFilter {
    /// Exact category name match.
    pub category: Option<String>,
    /// Number of leading servers to keep.
    pub qty: Option<u64>,
    /// Caller ID when `by_user=true`; only present for authenticated callers.
    pub by_user: Option<i32>,
    /// Server ID to look up.
    pub by_server_id: Option<i32>,
    /// Whether every returned server is annotated with its member count.
    pub with_num_members: bool,
}

impl ServerFilter {
    /// Builds the filter from raw query parameters.
    ///
    /// Checks run in listing order so the first failing step decides the error:
    /// authentication for `by_user`, then `qty`, then `by_server_id`.
    ///
    /// # Arguments
    /// - `caller` - ID of the logged in user, `None` for anonymous callers
    /// - `query` - Raw query parameters
    ///
    /// # Returns
    /// - `Ok(ServerFilter)` - Validated filter
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - `by_user=true` without a caller
    /// - `Err(AppError::ValidationErr(_))` - Malformed `qty` or `by_server_id`
    pub fn from_query(caller: Option<i32>, query: ServerListQuery) -> Result<Self, AppError> {
        let by_user = if parse_flag(query.by_user.as_deref()) {
            Some(caller.ok_or(AuthError::NotAuthenticated)?)
        } else {
            None
        };

        let qty = query.qty.as_deref().map(parse_quantity).transpose()?;
        let by_server_id = query
            .by_server_id
            .as_deref()
            .map(parse_server_id)
            .transpose()?;

        Ok(Self {
            category: query.category,
            qty,
            by_user,
            by_server_id,
            with_num_members: parse_flag(query.with_num_members.as_deref()),
        })
    }

    /// Returns the part of the filter the database applies.
    ///
    /// Category and membership precede the quantity limit in the listing order,
    /// so all three run in the query. Member counts do not depend on the limit,
    /// which lets the annotation happen afterwards in the service.
    pub fn query_param(&self) -> ServerQueryParam {
        ServerQueryParam {
            category: self.category.clone(),
            member_id: self.by_user,
            limit: self.qty,
        }
    }
}
