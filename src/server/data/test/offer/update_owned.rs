use super::*;

/// Tests updating an offer without revalidation.
///
/// Verifies that the fields are replaced while the validation status and the validation
/// date stay untouched.
///
/// Expected: Ok(1) with status still VALIDATED
#[tokio::test]
async fn keeps_status_without_revalidation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let offer = factory::create_validated_offer(db, company.id).await?;

    let mut fields = fields_from(&offer, offer.remuneration);
    fields.description = Some("Now with a description".to_string());

    let repo = OfferRepository::new(db);
    let rows = repo
        .update_owned(company.id, offer.id, fields, false, Utc::now())
        .await?;

    assert_eq!(rows, 1);
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.validation_status, "VALIDATED");
    assert_eq!(stored.validated_at, offer.validated_at);
    assert_eq!(stored.description.as_deref(), Some("Now with a description"));

    Ok(())
}

/// Tests updating an offer with revalidation.
///
/// Verifies that the offer returns to PENDING, the submission date becomes the given
/// instant and the validation date is cleared.
///
/// Expected: Ok(1) with status PENDING and no validation date
#[tokio::test]
async fn resets_validation_when_revalidating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let offer = factory::offer::OfferFactory::new(db, company.id)
        .status("VALIDATED")
        .submitted_at(Utc::now() - Duration::days(10))
        .build()
        .await?;
    let now = Utc::now();

    let repo = OfferRepository::new(db);
    let rows = repo
        .update_owned(company.id, offer.id, fields_from(&offer, 900.0), true, now)
        .await?;

    assert_eq!(rows, 1);
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.validation_status, "PENDING");
    assert!(stored.validated_at.is_none());
    assert!(stored.submitted_at > offer.submitted_at);
    assert_eq!(stored.remuneration, 900.0);

    Ok(())
}

/// Tests that another company cannot update the offer.
///
/// Expected: Ok(0) with the offer unchanged
#[tokio::test]
async fn ignores_offer_of_other_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let offer = factory::create_offer(db, owner.id).await?;

    let mut fields = fields_from(&offer, 1.0);
    fields.start_date = date(2030, 1, 1);
    fields.expiration_date = date(2030, 2, 1);

    let repo = OfferRepository::new(db);
    let rows = repo
        .update_owned(other.id, offer.id, fields, false, Utc::now())
        .await?;

    assert_eq!(rows, 0);
    let stored = entity::prelude::Offer::find_by_id(offer.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, offer);

    Ok(())
}
