//! Server membership factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a user to a server's membership set.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - ID of the server
/// - `user_id` - ID of the member
///
/// # Returns
/// - `Ok(entity::server_member::Model)` - Created membership row
/// - `Err(DbErr)` - Database error (e.g. duplicate membership)
pub async fn create_member(
    db: &DatabaseConnection,
    server_id: i32,
    user_id: i32,
) -> Result<entity::server_member::Model, DbErr> {
    entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds several users to a server's membership set.
///
/// # Returns
/// - `Ok(Vec<entity::server_member::Model>)` - Created rows in input order
/// - `Err(DbErr)` - Database error on the first failing insert
pub async fn create_members(
    db: &DatabaseConnection,
    server_id: i32,
    user_ids: &[i32],
) -> Result<Vec<entity::server_member::Model>, DbErr> {
    let mut members = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        members.push(create_member(db, server_id, *user_id).await?);
    }
    Ok(members)
}
