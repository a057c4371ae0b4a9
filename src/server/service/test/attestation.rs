use super::*;
use crate::server::{model::attestation::AttestationStatus, service::attestation::AttestationService};
use chrono::Utc;
use sea_orm::EntityTrait;

/// Tests that the secretary reviews while present and the referent teacher during leave.
///
/// Expected: Ok(Valide) for the present secretary with a one year expiry, then
/// Err(AuthError::AccessDenied) for the same secretary on leave while the teacher succeeds
#[tokio::test]
async fn review_authority_follows_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    let first = factory::create_student_in_group(db, chain.group.id).await?;
    let second = factory::create_student_in_group(db, chain.group.id).await?;
    factory::create_attestation(db, first.id).await?;
    factory::create_attestation(db, second.id).await?;

    let secretary = principal_of(db, chain.secretary.user_id).await?;
    let teacher = principal_of(db, chain.teacher.user_id).await?;
    let service = AttestationService::new(db);

    assert_eq!(service.list_to_review(&secretary).await?.len(), 2);
    assert!(service.list_to_review(&teacher).await?.is_empty());

    let status = service.review(&secretary, first.id, "VALIDE").await?;
    assert_eq!(status, AttestationStatus::Valide);
    let validated = entity::prelude::RcAttestation::find_by_id(first.id)
        .one(db)
        .await?
        .unwrap();
    let expires_at = validated.expires_at.unwrap();
    assert!(expires_at > Utc::now() + chrono::Duration::days(360));

    crate::server::service::leave::LeaveService::new(db)
        .toggle(chain.secretary.id, true)
        .await?;

    assert!(matches!(
        service.review(&secretary, second.id, "REFUSE").await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.list_to_review(&teacher).await?.len(), 1);
    assert_eq!(
        service.review(&teacher, second.id, "REFUSE").await?,
        AttestationStatus::Refuse
    );

    Ok(())
}

/// Tests that a secretary cannot review a student of another secretary's group.
///
/// Expected: Err(AuthError::AccessDenied), while an admin may review it
#[tokio::test]
async fn denies_student_outside_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ours = factory::helpers::create_delegation_chain(db, false).await?;
    let theirs = factory::helpers::create_delegation_chain(db, false).await?;
    let student = factory::create_student_in_group(db, theirs.group.id).await?;
    factory::create_attestation(db, student.id).await?;

    let secretary = principal_of(db, ours.secretary.user_id).await?;
    let admin_user = factory::user::create_admin(db).await?;
    let admin = principal_of(db, admin_user.id).await?;
    let service = AttestationService::new(db);

    assert!(matches!(
        service.review(&secretary, student.id, "VALIDE").await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.list_to_review(&admin).await?.len(), 1);
    assert_eq!(
        service.review(&admin, student.id, "VALIDE").await?,
        AttestationStatus::Valide
    );

    Ok(())
}

/// Tests reviewing twice, with a bad decision and without any deposit.
///
/// Expected: Err(AppError::Conflict), Err(AppError::Validation) and Err(AppError::NotFound)
#[tokio::test]
async fn review_rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    let student = factory::create_student_in_group(db, chain.group.id).await?;
    let without_deposit = factory::create_student_in_group(db, chain.group.id).await?;
    factory::create_attestation(db, student.id).await?;

    let secretary = principal_of(db, chain.secretary.user_id).await?;
    let service = AttestationService::new(db);

    assert!(matches!(
        service.review(&secretary, student.id, "EN_ATTENTE").await,
        Err(AppError::Validation(_))
    ));
    service.review(&secretary, student.id, "REFUSE").await?;
    assert!(matches!(
        service.review(&secretary, student.id, "VALIDE").await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.review(&secretary, without_deposit.id, "VALIDE").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a new deposit puts a refused attestation back in review.
///
/// Expected: Err(AppError::Validation) for a blank URL, then Ok with the attestation
/// listed again
#[tokio::test]
async fn resubmission_returns_to_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    let student = factory::create_student_in_group(db, chain.group.id).await?;
    factory::rc_attestation::AttestationFactory::new(db, student.id)
        .status("REFUSE")
        .build()
        .await?;

    let secretary = principal_of(db, chain.secretary.user_id).await?;
    let service = AttestationService::new(db);
    assert!(service.list_to_review(&secretary).await?.is_empty());

    assert!(matches!(
        service.submit(student.id, "   ").await,
        Err(AppError::Validation(_))
    ));
    service
        .submit(student.id, " https://files.test/rc-2026.pdf ")
        .await?;

    let listed = service.list_to_review(&secretary).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].file_url, "https://files.test/rc-2026.pdf");

    Ok(())
}
