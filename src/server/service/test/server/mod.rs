use crate::{
    model::server::ServerListQuery,
    server::{
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::server::ServerFilter,
        service::server::ServerService,
    },
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod list;

/// Users and servers shared by the listing tests.
///
/// Server 1 is in "gaming" with members A and B, server 2 is in "music" with
/// member A only.
struct Collection {
    a: i32,
    b: i32,
    gaming: i32,
    music: i32,
}

async fn seed_collection(db: &DatabaseConnection) -> Result<Collection, AppError> {
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let gaming = factory::create_category_named(db, "gaming").await?;
    let music = factory::create_category_named(db, "music").await?;

    let gaming_server =
        factory::helpers::create_server_with_members(db, gaming.id, &[a.id, b.id]).await?;
    let music_server = factory::helpers::create_server_with_members(db, music.id, &[a.id]).await?;

    Ok(Collection {
        a: a.id,
        b: b.id,
        gaming: gaming_server.id,
        music: music_server.id,
    })
}

/// Builds a filter the way the controller does for an anonymous or logged in caller.
fn filter(caller: Option<i32>, query: ServerListQuery) -> Result<ServerFilter, AppError> {
    ServerFilter::from_query(caller, query)
}

fn param(value: &str) -> Option<String> {
    Some(value.to_string())
}
