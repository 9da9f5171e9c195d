//! Server listing pipeline.
//!
//! Narrowing by category, membership and quantity happens in the database query.
//! The service then annotates member counts and applies the single-server lookup,
//! which is the only step that can fail on an otherwise valid filter.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{validation::ValidationError, AppError},
    model::server::{Server, ServerFilter},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the filter.
    ///
    /// Steps run in a fixed order: category, membership, member count annotation,
    /// quantity, then server ID. The quantity limit is taken before the server ID
    /// lookup, so a server outside the first `qty` results is reported as not found.
    ///
    /// # Arguments
    /// - `filter` - Validated listing filter
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers ordered by ascending ID
    /// - `Err(AppError::ValidationErr(ServerNotFound))` - `by_server_id` matched nothing
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn list(&self, filter: &ServerFilter) -> Result<Vec<Server>, AppError> {
        let repo = ServerRepository::new(self.db);

        let mut servers = repo.find(&filter.query_param()).await?;

        if filter.with_num_members {
            annotate_member_counts(&mut servers);
        }

        if let Some(server_id) = filter.by_server_id {
            servers = retain_server_id(servers, server_id)?;
        }

        tracing::debug!(
            "Listed {} servers (category: {:?}, qty: {:?}, by_user: {:?}, by_server_id: {:?})",
            servers.len(),
            filter.category,
            filter.qty,
            filter.by_user,
            filter.by_server_id
        );

        Ok(servers)
    }
}

/// Sets each server's member count from its membership set.
fn annotate_member_counts(servers: &mut [Server]) {
    for server in servers {
        server.num_members = Some(server.members.len() as u64);
    }
}

/// Keeps only the server with the given ID.
///
/// An empty result is an error rather than an empty list.
fn retain_server_id(servers: Vec<Server>, server_id: i32) -> Result<Vec<Server>, AppError> {
    let servers: Vec<Server> = servers
        .into_iter()
        .filter(|server| server.id == server_id)
        .collect();

    if servers.is_empty() {
        return Err(ValidationError::ServerNotFound(server_id).into());
    }

    Ok(servers)
}
