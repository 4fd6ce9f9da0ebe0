use super::*;

/// Tests that members form a set.
///
/// Expected: first add returns true, repeated add returns false, one row stored
#[tokio::test]
async fn adding_member_twice_keeps_one_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    assert!(repo.add_member(server.id, owner.id).await?);
    assert!(!repo.add_member(server.id, owner.id).await?);

    let loaded = repo.get_by_id(server.id).await?.unwrap();
    assert_eq!(loaded.members.len(), 1);

    Ok(())
}

/// Tests removing a member.
///
/// Expected: Ok(true) for a member, Ok(false) once removed
#[tokio::test]
async fn removes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);
    repo.add_member(server.id, owner.id).await?;

    assert!(repo.remove_member(server.id, owner.id).await?);
    assert!(!repo.remove_member(server.id, owner.id).await?);

    let loaded = repo.get_by_id(server.id).await?.unwrap();
    assert!(loaded.members.is_empty());

    Ok(())
}

/// Tests that a membership must reference an existing user.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, server) = factory::helpers::create_server_with_dependencies(db).await?;

    let repo = ServerRepository::new(db);

    assert!(repo.add_member(server.id, 42).await.is_err());

    Ok(())
}
