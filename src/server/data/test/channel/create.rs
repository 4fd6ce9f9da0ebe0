use super::*;

/// Tests creating channels and listing them per server.
///
/// Expected: only the requested server's channels, in creation order
#[tokio::test]
async fn creates_channels_and_lists_by_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, server) = factory::helpers::create_server_with_dependencies(db).await?;
    let other = factory::create_server(db, owner.id, category.id).await?;
    factory::create_channel(db, owner.id, other.id).await?;

    let repo = ChannelRepository::new(db);
    let general = repo
        .create(CreateChannelParams {
            name: "general".to_string(),
            topic: "Anything goes".to_string(),
            owner_id: owner.id,
            server_id: server.id,
        })
        .await?;
    let clips = repo
        .create(CreateChannelParams {
            name: "clips".to_string(),
            topic: "Share highlights".to_string(),
            owner_id: owner.id,
            server_id: server.id,
        })
        .await?;

    let channels = repo.get_by_server_id(server.id).await?;

    assert_eq!(channels, vec![general, clips]);

    Ok(())
}

/// Tests that deleting a server removes its channels.
///
/// Expected: no channels left for the deleted server
#[tokio::test]
async fn server_deletion_removes_channels() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, server) = factory::helpers::create_server_with_dependencies(db).await?;
    factory::create_channel(db, owner.id, server.id).await?;

    entity::prelude::Server::delete_by_id(server.id)
        .exec(db)
        .await?;

    let repo = ChannelRepository::new(db);

    assert!(repo.get_by_server_id(server.id).await?.is_empty());

    Ok(())
}
