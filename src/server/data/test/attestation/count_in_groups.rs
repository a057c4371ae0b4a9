use super::*;

/// Tests counting attestations by status within a set of groups.
///
/// Expected: one pending and one validated attestation in the group, none elsewhere
#[tokio::test]
async fn counts_by_status_within_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    let other = factory::helpers::create_delegation_chain(db, false).await?;
    let pending = factory::create_student_in_group(db, chain.group.id).await?;
    let validated = factory::create_student_in_group(db, chain.group.id).await?;
    let outsider = factory::create_student_in_group(db, other.group.id).await?;
    factory::create_attestation(db, pending.id).await?;
    factory::create_attestation(db, outsider.id).await?;
    factory::rc_attestation::AttestationFactory::new(db, validated.id)
        .status("VALIDE")
        .build()
        .await?;

    let repo = AttestationRepository::new(db);
    let groups = [chain.group.id];
    assert_eq!(
        repo.count_in_groups(&groups, AttestationStatus::EnAttente)
            .await?,
        1
    );
    assert_eq!(
        repo.count_in_groups(&groups, AttestationStatus::Valide)
            .await?,
        1
    );
    assert_eq!(
        repo.count_in_groups(&groups, AttestationStatus::Refuse)
            .await?,
        0
    );
    assert_eq!(
        repo.count_in_groups(&[], AttestationStatus::EnAttente)
            .await?,
        0
    );

    Ok(())
}
