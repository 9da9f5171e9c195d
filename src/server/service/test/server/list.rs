use super::*;

/// Tests listing without any parameters.
///
/// Expected: Ok with every server, ordered by ID, without member counts
#[tokio::test]
async fn returns_full_collection_without_parameters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(None, ServerListQuery::default())?)
        .await?;

    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![seeded.gaming, seeded.music]);
    assert!(servers.iter().all(|s| s.num_members.is_none()));
    assert_eq!(servers[0].members, vec![seeded.a, seeded.b]);

    Ok(())
}

/// Tests category narrowing combined with member counts.
///
/// Expected: Ok with the gaming server only, annotated with 2 members
#[tokio::test]
async fn filters_category_with_member_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                category: param("gaming"),
                with_num_members: param("true"),
                ..Default::default()
            },
        )?)
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, seeded.gaming);
    assert_eq!(servers[0].category, "gaming");
    assert_eq!(servers[0].num_members, Some(2));

    Ok(())
}

/// Tests that an unknown category yields an empty list rather than an error.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn unknown_category_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                category: param("Gaming"),
                ..Default::default()
            },
        )?)
        .await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests the quantity limit against the unfiltered order.
///
/// Expected: Ok with a prefix of length min(qty, total)
#[tokio::test]
async fn quantity_returns_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);

    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("1"),
                ..Default::default()
            },
        )?)
        .await?;
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, seeded.gaming);

    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("5"),
                ..Default::default()
            },
        )?)
        .await?;
    assert_eq!(servers.len(), 2);

    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("0"),
                ..Default::default()
            },
        )?)
        .await?;
    assert!(servers.is_empty());

    Ok(())
}

/// Tests member counts on a truncated result.
///
/// Verifies the count reflects the full membership set even when fewer
/// servers are returned.
///
/// Expected: Ok with one server annotated with 2 members
#[tokio::test]
async fn member_counts_survive_quantity_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("1"),
                with_num_members: param("true"),
                ..Default::default()
            },
        )?)
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, seeded.gaming);
    assert_eq!(servers[0].num_members, Some(2));

    Ok(())
}

/// Tests membership narrowing for a logged in caller.
///
/// Expected: Ok with only servers that list the caller as a member
#[tokio::test]
async fn by_user_keeps_caller_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);

    let servers = service
        .list(&filter(
            Some(seeded.b),
            ServerListQuery {
                by_user: param("true"),
                ..Default::default()
            },
        )?)
        .await?;
    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![seeded.gaming]);
    assert!(servers.iter().all(|s| s.members.contains(&seeded.b)));

    let servers = service
        .list(&filter(
            Some(seeded.a),
            ServerListQuery {
                by_user: param("true"),
                ..Default::default()
            },
        )?)
        .await?;
    assert_eq!(servers.len(), 2);

    Ok(())
}

/// Tests that the quantity limit counts only the caller's servers.
///
/// Expected: Ok with the caller's server even though it is not first overall
#[tokio::test]
async fn membership_applies_before_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let listener = factory::create_user(db).await?;
    factory::create_member(db, seeded.music, listener.id).await?;

    let service = ServerService::new(db);

    let servers = service
        .list(&filter(
            Some(listener.id),
            ServerListQuery {
                qty: param("1"),
                by_user: param("true"),
                ..Default::default()
            },
        )?)
        .await?;
    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![seeded.music]);

    Ok(())
}

/// Tests membership narrowing for an anonymous caller.
///
/// Expected: Err(AuthError::NotAuthenticated) before any query runs
#[tokio::test]
async fn by_user_requires_authentication() -> Result<(), AppError> {
    let result = filter(
        None,
        ServerListQuery {
            by_user: param("true"),
            category: param("gaming"),
            ..Default::default()
        },
    );

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotAuthenticated))
    ));

    Ok(())
}

/// Tests looking up an existing server by ID.
///
/// Expected: Ok with exactly that server
#[tokio::test]
async fn by_server_id_returns_singleton() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                by_server_id: Some(seeded.music.to_string()),
                ..Default::default()
            },
        )?)
        .await?;

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, seeded.music);
    assert_eq!(servers[0].category, "music");

    Ok(())
}

/// Tests looking up a server ID that does not exist.
///
/// Expected: Err(ValidationError::ServerNotFound(99))
#[tokio::test]
async fn unknown_server_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_collection(db).await?;

    let service = ServerService::new(db);
    let result = service
        .list(&filter(
            None,
            ServerListQuery {
                by_server_id: param("99"),
                ..Default::default()
            },
        )?)
        .await;

    match result {
        Err(AppError::ValidationErr(err)) => {
            assert_eq!(err, ValidationError::ServerNotFound(99));
            assert_eq!(err.to_string(), "Server with id 99 not found");
        }
        other => panic!("expected ServerNotFound, got {:?}", other.map(|s| s.len())),
    }

    Ok(())
}

/// Tests that the server ID lookup only sees servers left by earlier steps.
///
/// Expected: Err(ServerNotFound) for a server outside the category or past `qty`
#[tokio::test]
async fn server_id_applies_after_other_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);

    let result = service
        .list(&filter(
            None,
            ServerListQuery {
                category: param("gaming"),
                by_server_id: Some(seeded.music.to_string()),
                ..Default::default()
            },
        )?)
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ServerNotFound(id))) if id == seeded.music
    ));

    let result = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("1"),
                by_server_id: Some(seeded.music.to_string()),
                ..Default::default()
            },
        )?)
        .await;
    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::ServerNotFound(_)))
    ));

    Ok(())
}

/// Tests that identical requests give identical results.
///
/// Expected: Ok with equal result sets on both calls
#[tokio::test]
async fn repeated_calls_are_identical() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seeded = seed_collection(db).await?;

    let service = ServerService::new(db);
    let filter = filter(
        Some(seeded.a),
        ServerListQuery {
            by_user: param("true"),
            with_num_members: param("true"),
            ..Default::default()
        },
    )?;

    let first = service.list(&filter).await?;
    let second = service.list(&filter).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests a quantity beyond the range the database accepts.
///
/// Expected: Err(ValidationError::InvalidQuantity) instead of a failed query
#[tokio::test]
async fn oversized_quantity_is_rejected() -> Result<(), AppError> {
    let result = filter(
        None,
        ServerListQuery {
            qty: param("9223372036854775808"),
            ..Default::default()
        },
    );

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::InvalidQuantity(v))) if v == "9223372036854775808"
    ));

    Ok(())
}

/// Tests the largest accepted quantity against the database.
///
/// Expected: Ok with every server
#[tokio::test]
async fn maximum_quantity_returns_all() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_server_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed_collection(db).await?;

    let service = ServerService::new(db);
    let servers = service
        .list(&filter(
            None,
            ServerListQuery {
                qty: param("9223372036854775807"),
                ..Default::default()
            },
        )?)
        .await?;

    assert_eq!(servers.len(), 2);

    Ok(())
}
