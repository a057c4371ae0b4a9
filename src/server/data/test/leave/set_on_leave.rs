use super::*;

/// Tests setting the leave flag of an existing secretary.
///
/// Expected: Ok(1) with the flag stored
#[tokio::test]
async fn sets_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let secretary = factory::create_secretary(db).await?;

    let repo = LeaveRepository::new(db);
    let rows = repo.set_on_leave(secretary.id, true).await?;

    assert_eq!(rows, 1);
    let stored = repo.find_secretary(secretary.id).await?.unwrap();
    assert!(stored.on_leave);

    Ok(())
}

/// Tests setting the flag of an unknown secretary.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unknown_secretary() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaveRepository::new(db);
    let rows = repo.set_on_leave(4242, true).await?;

    assert_eq!(rows, 0);

    Ok(())
}
