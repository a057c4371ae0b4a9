use super::*;

/// Tests reviewing a pending offer.
///
/// Expected: Ok(1) with status VALIDATED and a validation date
#[tokio::test]
async fn validates_pending_offer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let offer = factory::create_offer(db, company.id).await?;

    let repo = OfferRepository::new(db);
    let rows = repo
        .review(offer.id, OfferStatus::Validated, Utc::now())
        .await?;

    assert_eq!(rows, 1);
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.validation_status, "VALIDATED");
    assert!(stored.validated_at.is_some());

    Ok(())
}

/// Tests that a reviewed offer cannot be reviewed again.
///
/// The write is conditional on the PENDING status, so a REJECTED offer stays rejected.
///
/// Expected: Ok(0) with status still REJECTED
#[tokio::test]
async fn skips_offer_no_longer_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let offer = factory::offer::OfferFactory::new(db, company.id)
        .status("REJECTED")
        .build()
        .await?;

    let repo = OfferRepository::new(db);
    let rows = repo
        .review(offer.id, OfferStatus::Validated, Utc::now())
        .await?;

    assert_eq!(rows, 0);
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.validation_status, "REJECTED");

    Ok(())
}
