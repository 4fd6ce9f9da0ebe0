use super::*;

/// Tests that categories are listed alphabetically.
///
/// Expected: names in ascending order regardless of insertion order
#[tokio::test]
async fn orders_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category_named(db, "Music").await?;
    factory::create_category_named(db, "Art").await?;
    factory::create_category_named(db, "Gaming").await?;

    let repo = CategoryRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Art", "Gaming", "Music"]);

    Ok(())
}

/// Tests listing when no categories exist.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
