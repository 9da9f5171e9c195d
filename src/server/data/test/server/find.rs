use super::*;

/// Tests finding servers without any narrowing.
///
/// Verifies that every server is returned, ordered by ascending ID, with its
/// category name and member set.
///
/// Expected: Ok with all servers in insertion order
#[tokio::test]
async fn returns_all_servers_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let gaming = factory::create_category_named(db, "gaming").await?;
    let music = factory::create_category_named(db, "music").await?;

    let first =
        factory::helpers::create_server_with_members(db, gaming.id, &[alice.id, bob.id]).await?;
    let second = factory::helpers::create_server_with_members(db, music.id, &[alice.id]).await?;

    let repo = ServerRepository::new(db);
    let servers = repo.find(&ServerQueryParam::default()).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, first.id);
    assert_eq!(servers[0].category, "gaming");
    assert_eq!(servers[0].members, vec![alice.id, bob.id]);
    assert_eq!(servers[0].num_members, None);
    assert_eq!(servers[1].id, second.id);
    assert_eq!(servers[1].category, "music");
    assert_eq!(servers[1].members, vec![alice.id]);

    Ok(())
}

/// Tests narrowing by category name.
///
/// Expected: Ok with only servers whose category name matches exactly
#[tokio::test]
async fn filters_by_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let gaming = factory::create_category_named(db, "gaming").await?;
    let gaming_news = factory::create_category_named(db, "gaming news").await?;

    let kept = factory::create_server(db, owner.id, gaming.id).await?;
    factory::create_server(db, owner.id, gaming_news.id).await?;
    let kept_too = factory::create_server(db, owner.id, gaming.id).await?;

    let repo = ServerRepository::new(db);
    let servers = repo
        .find(&ServerQueryParam {
            category: Some("gaming".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![kept.id, kept_too.id]);
    assert!(servers.iter().all(|s| s.category == "gaming"));

    Ok(())
}

/// Tests narrowing by an unknown category name.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    let servers = repo
        .find(&ServerQueryParam {
            category: Some("does not exist".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests narrowing by membership.
///
/// Verifies that only servers the user belongs to are returned and that the
/// returned member sets are complete, not just the filtering user.
///
/// Expected: Ok with the user's servers and full member sets
#[tokio::test]
async fn filters_by_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let shared =
        factory::helpers::create_server_with_members(db, category.id, &[alice.id, bob.id]).await?;
    factory::helpers::create_server_with_members(db, category.id, &[bob.id]).await?;
    factory::helpers::create_server_with_members(db, category.id, &[]).await?;

    let repo = ServerRepository::new(db);
    let servers = repo
        .find(&ServerQueryParam {
            member_id: Some(alice.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, shared.id);
    assert_eq!(servers[0].members, vec![alice.id, bob.id]);

    Ok(())
}

/// Tests that member sets are complete for every returned server.
///
/// Expected: Ok with all members in ascending ID order, empty for servers without members
#[tokio::test]
async fn loads_complete_member_sets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let owner = factory::create_user(db).await?;
    let server = factory::create_server(db, owner.id, category.id).await?;
    factory::create_member(db, server.id, bob.id).await?;
    factory::create_member(db, server.id, alice.id).await?;
    let empty = factory::helpers::create_server_with_members(db, category.id, &[]).await?;

    let repo = ServerRepository::new(db);
    let servers = repo.find(&ServerQueryParam::default()).await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, server.id);
    assert_eq!(servers[0].owner_id, owner.id);
    assert_eq!(servers[0].members, vec![alice.id, bob.id]);
    assert_eq!(servers[1].id, empty.id);
    assert!(servers[1].members.is_empty());

    Ok(())
}

/// Tests limiting the number of servers.
///
/// Expected: Ok with the first `limit` servers, or all when fewer exist
#[tokio::test]
async fn applies_limit_after_ordering() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let first = factory::create_server(db, owner.id, category.id).await?;
    let second = factory::create_server(db, owner.id, category.id).await?;
    factory::create_server(db, owner.id, category.id).await?;

    let repo = ServerRepository::new(db);

    let servers = repo
        .find(&ServerQueryParam {
            limit: Some(2),
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let servers = repo
        .find(&ServerQueryParam {
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    assert_eq!(servers.len(), 3);

    let servers = repo
        .find(&ServerQueryParam {
            limit: Some(0),
            ..Default::default()
        })
        .await?;
    assert!(servers.is_empty());

    Ok(())
}

/// Tests that the limit counts only servers in the requested category.
///
/// Expected: Ok with the first two matching servers
#[tokio::test]
async fn limits_within_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let gaming = factory::create_category_named(db, "gaming").await?;
    let music = factory::create_category_named(db, "music").await?;

    factory::create_server(db, owner.id, music.id).await?;
    let first = factory::create_server(db, owner.id, gaming.id).await?;
    factory::create_server(db, owner.id, music.id).await?;
    let second = factory::create_server(db, owner.id, gaming.id).await?;
    factory::create_server(db, owner.id, gaming.id).await?;

    let repo = ServerRepository::new(db);
    let servers = repo
        .find(&ServerQueryParam {
            category: Some("gaming".to_string()),
            limit: Some(2),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that the limit counts only servers the member belongs to.
///
/// Expected: Ok with the first matching server, even though an earlier server exists
#[tokio::test]
async fn limits_after_category_and_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let gaming = factory::create_category_named(db, "gaming").await?;
    let music = factory::create_category_named(db, "music").await?;

    factory::helpers::create_server_with_members(db, music.id, &[alice.id]).await?;
    factory::helpers::create_server_with_members(db, gaming.id, &[bob.id]).await?;
    let expected = factory::helpers::create_server_with_members(db, gaming.id, &[alice.id]).await?;
    factory::helpers::create_server_with_members(db, gaming.id, &[alice.id, bob.id]).await?;

    let repo = ServerRepository::new(db);
    let servers = repo
        .find(&ServerQueryParam {
            category: Some("gaming".to_string()),
            member_id: Some(alice.id),
            limit: Some(1),
        })
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, expected.id);

    Ok(())
}
