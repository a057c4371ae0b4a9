use super::*;

/// Tests a company decision on its own pending candidature.
///
/// Expected: Ok(1) with status RETENU
#[tokio::test]
async fn company_moves_own_pending_candidature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_candidature_chain(db, "EN_ATTENTE").await?;

    let repo = CandidatureRepository::new(db);
    let rows = repo
        .transition_for_company(
            chain.company.id,
            chain.candidature.id,
            CandidatureStatus::EnAttente,
            CandidatureStatus::Retenu,
        )
        .await?;

    assert_eq!(rows, 1);
    let stored = entity::prelude::Candidature::find_by_id(chain.candidature.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "RETENU");

    Ok(())
}

/// Tests that a company cannot decide on another company's candidature.
///
/// Expected: Ok(0) with status still EN_ATTENTE
#[tokio::test]
async fn company_cannot_move_foreign_candidature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_candidature_chain(db, "EN_ATTENTE").await?;
    let intruder = factory::create_company(db).await?;

    let repo = CandidatureRepository::new(db);
    let rows = repo
        .transition_for_company(
            intruder.id,
            chain.candidature.id,
            CandidatureStatus::EnAttente,
            CandidatureStatus::Refuse,
        )
        .await?;

    assert_eq!(rows, 0);
    assert!(!repo
        .is_visible_to_company(intruder.id, chain.candidature.id)
        .await?);
    assert!(repo
        .is_visible_to_company(chain.company.id, chain.candidature.id)
        .await?);

    Ok(())
}

/// Tests that the write is conditional on the expected prior status.
///
/// Expected: Ok(0) when the candidature already left EN_ATTENTE
#[tokio::test]
async fn skips_candidature_in_other_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_candidature_chain(db, "ANNULE").await?;

    let repo = CandidatureRepository::new(db);
    let rows = repo
        .transition_for_student(
            chain.student.id,
            chain.candidature.id,
            CandidatureStatus::EnAttente,
            CandidatureStatus::Annule,
        )
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}

/// Tests holding a candidature that is still in the expected status.
///
/// Expected: Ok(1) with status unchanged, then Ok(0) once the candidature is refused
#[tokio::test]
async fn hold_status_requires_current_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_candidature_chain(db, "RETENU").await?;

    let repo = CandidatureRepository::new(db);
    let held = repo
        .hold_status(chain.candidature.id, CandidatureStatus::Retenu)
        .await?;
    assert_eq!(held, 1);

    repo.transition(
        chain.candidature.id,
        CandidatureStatus::Retenu,
        CandidatureStatus::Refuse,
    )
    .await?;

    let held = repo
        .hold_status(chain.candidature.id, CandidatureStatus::Retenu)
        .await?;
    assert_eq!(held, 0);

    let stored = entity::prelude::Candidature::find_by_id(chain.candidature.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "REFUSE");

    Ok(())
}
