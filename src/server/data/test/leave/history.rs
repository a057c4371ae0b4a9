use super::*;

/// Tests reading the leave log of one secretary.
///
/// Verifies newest-first ordering and that other secretaries' entries are excluded.
///
/// Expected: Ok with the secretary's two entries, newest first
#[tokio::test]
async fn returns_own_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let secretary = factory::create_secretary(db).await?;
    let other = factory::create_secretary(db).await?;

    let repo = LeaveRepository::new(db);
    let now = Utc::now();
    repo.append_log(secretary.id, true, now - Duration::hours(2))
        .await?;
    repo.append_log(secretary.id, false, now - Duration::hours(1))
        .await?;
    repo.append_log(other.id, true, now).await?;

    let history = repo.history(secretary.id).await?;

    assert_eq!(history.len(), 2);
    assert!(!history[0].on_leave);
    assert!(history[1].on_leave);
    assert!(history.iter().all(|entry| entry.secretary_id == secretary.id));

    Ok(())
}
