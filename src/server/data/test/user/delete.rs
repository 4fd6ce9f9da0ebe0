use super::*;

/// Tests that deleting a user removes everything that depends on them.
///
/// Verifies that servers the user owns, channels inside those servers and channels the
/// user owns elsewhere, and the user's memberships in other servers are all removed.
///
/// Expected: Ok(true), dependent rows gone, unrelated server intact
#[tokio::test]
async fn cascades_to_owned_servers_channels_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let owned = factory::create_server(db, owner.id, category.id).await?;
    factory::create_channel(db, other.id, owned.id).await?;

    let foreign = factory::server::ServerFactory::new(db, other.id, category.id)
        .members(&[owner.id, other.id])
        .build()
        .await?;
    factory::create_channel(db, owner.id, foreign.id).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(owner.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Server::find_by_id(owned.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Server::find_by_id(foreign.id)
        .one(db)
        .await?
        .is_some());
    assert_eq!(entity::prelude::Channel::find().count(db).await?, 0);

    let members = entity::prelude::ServerMember::find().all(db).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user_id, other.id);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
