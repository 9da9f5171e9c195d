use super::*;

/// Tests finding an existing user by local ID.
///
/// Expected: Ok(Some) with matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("555")
        .name("Finder")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await?;

    let found = found.expect("user should exist");
    assert_eq!(found.id, user.id);
    assert_eq!(found.discord_id, "555");
    assert_eq!(found.name, "Finder");

    Ok(())
}

/// Tests finding a user ID that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
