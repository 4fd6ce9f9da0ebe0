use super::*;

/// Tests deleting an unused category.
///
/// Expected: Ok(true) and the category is gone
#[tokio::test]
async fn deletes_unused_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.count_servers(category.id).await?, 0);
    assert!(repo.delete(category.id).await?);
    assert!(repo.get_by_id(category.id).await?.is_none());

    Ok(())
}

/// Tests that a category referenced by a server cannot be deleted.
///
/// Expected: Err(DbErr) from the foreign key, category and server intact
#[tokio::test]
async fn refuses_to_delete_category_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, _) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = CategoryRepository::new(db);

    assert_eq!(repo.count_servers(category.id).await?, 1);
    assert!(repo.delete(category.id).await.is_err());
    assert!(repo.get_by_id(category.id).await?.is_some());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
