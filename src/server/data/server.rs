//! Server data repository for database operations.
//!
//! Provides the read side of the server listing: the filtered, ordered server
//! query and the membership lookup used to fill in each server's member set.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait,
};

use crate::server::model::server::{Server, ServerQueryParam};

/// Repository providing read access to servers and their memberships.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds servers matching the query parameters, ordered by ascending ID.
    ///
    /// The category is joined so it can be matched by name, the membership table
    /// is only joined when `member_id` is set. The limit is applied after both
    /// conditions. Member sets of the returned servers are loaded with a second
    /// query.
    ///
    /// # Arguments
    /// - `param` - Category, membership and limit narrowing
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers with category name and members
    /// - `Err(DbErr)` - Database error, or a server whose category row is missing
    pub async fn find(&self, param: &ServerQueryParam) -> Result<Vec<Server>, DbErr> {
        let rows = entity::prelude::Server::find()
            .find_also_related(entity::prelude::Category)
            .apply_if(param.category.as_deref(), |query, name| {
                query.filter(entity::category::Column::Name.eq(name))
            })
            .apply_if(param.member_id, |query, user_id| {
                query
                    .join(
                        JoinType::InnerJoin,
                        entity::server::Relation::ServerMember.def(),
                    )
                    .filter(entity::server_member::Column::UserId.eq(user_id))
            })
            .order_by_asc(entity::server::Column::Id)
            .apply_if(param.limit, |query, limit| query.limit(limit))
            .all(self.db)
            .await?;

        let server_ids: Vec<i32> = rows.iter().map(|(server, _)| server.id).collect();
        let mut members = self.get_member_ids(&server_ids).await?;

        rows.into_iter()
            .map(|(server, category)| {
                let server_members = members.remove(&server.id).unwrap_or_default();
                Server::from_entity(server, category, server_members)
            })
            .collect()
    }

    /// Gets the member user IDs of each of the given servers.
    ///
    /// # Arguments
    /// - `server_ids` - Servers to load memberships for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<i32>>)` - Member IDs (ascending) keyed by server ID;
    ///   servers without members have no entry
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_member_ids(
        &self,
        server_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let memberships = entity::prelude::ServerMember::find()
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .order_by_asc(entity::server_member::Column::UserId)
            .all(self.db)
            .await?;

        let mut members: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in memberships {
            members
                .entry(membership.server_id)
                .or_default()
                .push(membership.user_id);
        }

        Ok(members)
    }
}
