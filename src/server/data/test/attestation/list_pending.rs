use super::*;

/// Tests restricting the review list to some groups.
///
/// Verifies that reviewed attestations and students of other groups are excluded, and
/// that the group name is joined in.
///
/// Expected: Ok with the single pending attestation of the requested group
#[tokio::test]
async fn lists_pending_of_given_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let secretary = factory::create_secretary(db).await?;
    let group = factory::student_group::GroupFactory::new(db, secretary.id)
        .name("BTS SIO 1")
        .build()
        .await?;
    let other_group = factory::create_group(db, secretary.id).await?;

    let pending = factory::create_student_in_group(db, group.id).await?;
    let reviewed = factory::create_student_in_group(db, group.id).await?;
    let elsewhere = factory::create_student_in_group(db, other_group.id).await?;
    factory::create_attestation(db, pending.id).await?;
    factory::rc_attestation::AttestationFactory::new(db, reviewed.id)
        .status("VALIDE")
        .build()
        .await?;
    factory::create_attestation(db, elsewhere.id).await?;

    let repo = AttestationRepository::new(db);
    let listed = repo.list_pending(Some(vec![group.id])).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].student_id, pending.id);
    assert_eq!(listed[0].group_name.as_deref(), Some("BTS SIO 1"));
    assert_eq!(listed[0].status, AttestationStatus::EnAttente);

    Ok(())
}

/// Tests the unrestricted and the empty group filters.
///
/// Expected: Ok with every pending attestation for `None`, nothing for an empty list
#[tokio::test]
async fn handles_unrestricted_and_empty_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let secretary = factory::create_secretary(db).await?;
    let group = factory::create_group(db, secretary.id).await?;
    let grouped = factory::create_student_in_group(db, group.id).await?;
    let ungrouped = factory::create_student(db).await?;
    factory::create_attestation(db, grouped.id).await?;
    factory::create_attestation(db, ungrouped.id).await?;

    let repo = AttestationRepository::new(db);

    assert_eq!(repo.list_pending(None).await?.len(), 2);
    assert!(repo.list_pending(Some(Vec::new())).await?.is_empty());

    Ok(())
}
