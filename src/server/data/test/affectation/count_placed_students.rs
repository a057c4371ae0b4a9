use super::*;

/// Tests that a student placed twice counts once and other groups are ignored.
///
/// Expected: Ok(1) for the student's group, Ok(0) for the other group and for no group
#[tokio::test]
async fn counts_each_placed_student_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;
    let other = factory::helpers::create_delegation_chain(db, false).await?;
    let student = factory::create_student_in_group(db, chain.group.id).await?;
    factory::create_student_in_group(db, chain.group.id).await?;
    let admin = factory::user::create_admin(db).await?;

    let company = factory::create_company(db).await?;
    for _ in 0..2 {
        let offer = factory::create_validated_offer(db, company.id).await?;
        let candidature = factory::candidature::CandidatureFactory::new(db, offer.id, student.id)
            .status("RETENU")
            .build()
            .await?;
        factory::create_affectation(db, candidature.id, admin.id).await?;
    }

    let repo = AffectationRepository::new(db);
    assert_eq!(repo.count_placed_students(&[chain.group.id]).await?, 1);
    assert_eq!(repo.count_placed_students(&[other.group.id]).await?, 0);
    assert_eq!(repo.count_placed_students(&[]).await?, 0);

    Ok(())
}
