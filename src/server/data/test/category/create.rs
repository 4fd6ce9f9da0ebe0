use super::*;

/// Tests creating a category and attaching an icon afterwards.
///
/// Expected: category created without icon, then icon key stored
#[tokio::test]
async fn creates_category_then_sets_icon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create("Gaming".to_string(), Some("Games and more".to_string()))
        .await?;

    assert_eq!(category.name, "Gaming");
    assert_eq!(category.description.as_deref(), Some("Games and more"));
    assert!(category.icon.is_none());

    let updated = repo
        .set_icon(category.id, "category/1/category_icon/pad.png".to_string())
        .await?;

    assert_eq!(updated.name, "Gaming");
    assert_eq!(
        updated.icon.as_deref(),
        Some("category/1/category_icon/pad.png")
    );

    let stored = repo.get_by_id(category.id).await?;
    assert_eq!(stored, Some(updated));

    Ok(())
}

/// Tests that a category written inside a rolled back transaction is discarded.
///
/// Verifies that the insert and the icon update roll back together when the
/// transaction is rolled back.
///
/// Expected: no category stored
#[tokio::test]
async fn discards_category_and_icon_on_rollback() -> Result<(), DbErr> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_table(entity::prelude::Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let txn = db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        let category = repo.create("Gaming".to_string(), None).await?;
        repo.set_icon(category.id, "category/1/category_icon/pad.png".to_string())
            .await?;

        txn.rollback().await?;
    }

    let repo = CategoryRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
