use super::*;

/// Tests loading servers with their category and members.
///
/// Verifies that servers come back in id order, each joined with its own category and
/// only its own member rows.
///
/// Expected: two servers with categories and member sets attached
#[tokio::test]
async fn loads_servers_with_category_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = factory::helpers::create_users(db, 3).await?;
    let gaming = factory::create_category_named(db, "Gaming").await?;
    let music = factory::create_category_named(db, "Music").await?;

    let first = factory::server::ServerFactory::new(db, users[0].id, gaming.id)
        .members(&[users[0].id, users[1].id])
        .build()
        .await?;
    let second = factory::server::ServerFactory::new(db, users[2].id, music.id)
        .members(&[users[2].id])
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let servers = repo.get_all_with_relations().await?;

    assert_eq!(servers.len(), 2);

    assert_eq!(servers[0].server.id, first.id);
    assert_eq!(servers[0].category.as_ref().map(|c| c.id), Some(gaming.id));
    let first_members: Vec<i32> = servers[0].members.iter().map(|m| m.user_id).collect();
    assert_eq!(first_members, vec![users[0].id, users[1].id]);

    assert_eq!(servers[1].server.id, second.id);
    assert_eq!(servers[1].category.as_ref().map(|c| c.id), Some(music.id));
    assert_eq!(servers[1].members.len(), 1);

    Ok(())
}

/// Tests loading servers when none exist.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(repo.get_all_with_relations().await?.is_empty());

    Ok(())
}

/// Tests that a user belonging to several servers appears in each member set.
///
/// Verifies that memberships loaded in one pass are grouped under their own server,
/// and that a server without members gets an empty set.
///
/// Expected: shared user in both populated servers, empty set for the third
#[tokio::test]
async fn groups_shared_members_per_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let users = factory::helpers::create_users(db, 2).await?;
    let category = factory::create_category(db).await?;

    factory::server::ServerFactory::new(db, users[0].id, category.id)
        .members(&[users[0].id, users[1].id])
        .build()
        .await?;
    factory::create_server(db, users[0].id, category.id).await?;
    factory::server::ServerFactory::new(db, users[1].id, category.id)
        .members(&[users[1].id])
        .build()
        .await?;

    let repo = ServerRepository::new(db);
    let servers = repo.get_all_with_relations().await?;

    let member_ids: Vec<Vec<i32>> = servers
        .iter()
        .map(|s| s.members.iter().map(|m| m.user_id).collect())
        .collect();

    assert_eq!(
        member_ids,
        vec![vec![users[0].id, users[1].id], vec![], vec![users[1].id]]
    );

    Ok(())
}
