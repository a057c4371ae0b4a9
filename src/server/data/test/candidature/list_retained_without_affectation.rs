use super::*;

/// Tests listing retained candidatures awaiting placement.
///
/// Verifies that placed, pending and refused candidatures are excluded and that the
/// company name is joined in.
///
/// Expected: Ok with only the unplaced RETENU candidature
#[tokio::test]
async fn lists_only_unplaced_retained() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let waiting = factory::helpers::create_retained_candidature(db).await?;
    let placed = factory::helpers::create_retained_candidature(db).await?;
    let staff = factory::create_user(db).await?;
    factory::create_affectation(db, placed.candidature.id, staff.id).await?;
    factory::helpers::create_candidature_chain(db, "EN_ATTENTE").await?;
    factory::helpers::create_candidature_chain(db, "REFUSE").await?;

    let repo = CandidatureRepository::new(db);
    let pending = repo.list_retained_without_affectation().await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].candidature_id, waiting.candidature.id);
    assert_eq!(pending[0].offer_id, waiting.offer.id);
    assert_eq!(pending[0].company_name, waiting.company.name);

    Ok(())
}
