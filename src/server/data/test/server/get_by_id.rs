use super::*;

/// Tests creating a server and loading it by id.
///
/// Expected: Ok(Some) with category attached and no members
#[tokio::test]
async fn creates_and_loads_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;

    let repo = ServerRepository::new(db);
    let created = repo
        .create(CreateServerParams {
            name: "Speedrunners".to_string(),
            description: None,
            owner_id: owner.id,
            category_id: category.id,
        })
        .await?;

    let loaded = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(loaded.server, created);
    assert_eq!(loaded.category.map(|c| c.name), Some(category.name));
    assert!(loaded.members.is_empty());

    Ok(())
}

/// Tests that a server must reference an existing category.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = ServerRepository::new(db);
    let result = repo
        .create(CreateServerParams {
            name: "Orphan".to_string(),
            description: None,
            owner_id: owner.id,
            category_id: 42,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests loading a server that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
