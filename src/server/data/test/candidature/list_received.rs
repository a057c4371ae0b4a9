use super::*;

/// Tests listing candidatures received by a company.
///
/// Verifies newest-first ordering, the joined student and offer details, and that
/// candidatures on other companies' offers are excluded.
///
/// Expected: Ok with the company's two candidatures, newest first
#[tokio::test]
async fn lists_company_candidatures_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let offer = factory::create_validated_offer(db, company.id).await?;
    let older_student = factory::create_student(db).await?;
    let newer_student = factory::create_student(db).await?;

    let older = factory::candidature::CandidatureFactory::new(db, offer.id, older_student.id)
        .applied_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::candidature::CandidatureFactory::new(db, offer.id, newer_student.id)
        .applied_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    // Noise on another company's offer
    factory::helpers::create_candidature_chain(db, "EN_ATTENTE").await?;

    let repo = CandidatureRepository::new(db);
    let received = repo.list_received(company.id, None).await?;

    assert_eq!(received.len(), 2);
    assert_eq!(received[0].id, newer.id);
    assert_eq!(received[1].id, older.id);
    assert_eq!(received[0].offer_title, offer.title);
    assert_eq!(received[0].status, CandidatureStatus::EnAttente);

    let user = entity::prelude::User::find_by_id(newer_student.user_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(received[0].student_name, user.name);
    assert_eq!(received[0].student_email, user.email);

    Ok(())
}

/// Tests filtering on one offer, including an offer the company does not own.
///
/// Expected: Ok with only that offer's candidatures, empty for a foreign offer
#[tokio::test]
async fn filters_by_offer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let first = factory::create_validated_offer(db, company.id).await?;
    let second = factory::create_validated_offer(db, company.id).await?;
    let student = factory::create_student(db).await?;
    factory::create_candidature(db, first.id, student.id).await?;
    let kept = factory::create_candidature(db, second.id, student.id).await?;

    let foreign = factory::helpers::create_candidature_chain(db, "EN_ATTENTE").await?;

    let repo = CandidatureRepository::new(db);

    let received = repo.list_received(company.id, Some(second.id)).await?;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, kept.id);

    let received = repo
        .list_received(company.id, Some(foreign.offer.id))
        .await?;
    assert!(received.is_empty());

    Ok(())
}
