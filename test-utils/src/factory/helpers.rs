//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factories and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server along with its owner and category.
///
/// Creates, in order:
/// 1. User (as owner)
/// 2. Category
/// 3. Server
///
/// The owner is not added as a member.
///
/// # Returns
/// - `Ok((owner, category, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, owner.id, category.id).await?;

    Ok((owner, category, server))
}

/// Creates a server in the given category with the given members.
///
/// The first member (if any) becomes the owner; otherwise a fresh user does.
///
/// # Arguments
/// - `db` - Database connection
/// - `category_id` - Category the server belongs to
/// - `member_ids` - Users to add to the membership set
///
/// # Returns
/// - `Ok(server)` - Created server
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_members(
    db: &DatabaseConnection,
    category_id: i32,
    member_ids: &[i32],
) -> Result<entity::server::Model, DbErr> {
    let owner_id = match member_ids.first() {
        Some(id) => *id,
        None => crate::factory::user::create_user(db).await?.id,
    };

    let server = crate::factory::server::create_server(db, owner_id, category_id).await?;
    crate::factory::server_member::create_members(db, server.id, member_ids).await?;

    Ok(server)
}
