use super::*;

/// Tests depositing a first attestation.
///
/// Expected: Ok with an EN_ATTENTE attestation holding the file URL
#[tokio::test]
async fn inserts_first_deposit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = AttestationRepository::new(db);
    let attestation = repo
        .upsert(student.id, "https://files.test/rc.pdf".to_string(), Utc::now())
        .await?;

    assert_eq!(attestation.student_id, student.id);
    assert_eq!(attestation.status, "EN_ATTENTE");
    assert_eq!(attestation.file_url, "https://files.test/rc.pdf");

    Ok(())
}

/// Tests replacing a reviewed attestation.
///
/// Verifies that a new deposit puts a refused attestation back in review and clears the
/// previous review dates.
///
/// Expected: Ok with status EN_ATTENTE and no validation or expiry date
#[tokio::test]
async fn replaces_reviewed_attestation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let repo = AttestationRepository::new(db);
    repo.upsert(student.id, "https://files.test/old.pdf".to_string(), Utc::now())
        .await?;
    repo.review(
        student.id,
        AttestationStatus::Valide,
        Utc::now(),
        Some(Utc::now() + Duration::days(365)),
    )
    .await?;

    let replaced = repo
        .upsert(student.id, "https://files.test/new.pdf".to_string(), Utc::now())
        .await?;

    assert_eq!(replaced.status, "EN_ATTENTE");
    assert_eq!(replaced.file_url, "https://files.test/new.pdf");
    assert!(replaced.validated_at.is_none());
    assert!(replaced.expires_at.is_none());

    Ok(())
}
