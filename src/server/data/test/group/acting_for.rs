use super::*;

/// Tests that a present secretary acts for the groups they administer.
///
/// Expected: Ok with the secretary's group, nothing for the referent teacher
#[tokio::test]
async fn present_secretary_holds_authority() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, false).await?;

    let repo = GroupRepository::new(db);

    let secretary_groups = repo.acting_for(Some(chain.secretary.id), None).await?;
    assert_eq!(secretary_groups, vec![chain.group.id]);

    let teacher_groups = repo.acting_for(None, Some(chain.teacher.id)).await?;
    assert!(teacher_groups.is_empty());

    Ok(())
}

/// Tests that authority moves to the referent teacher while the secretary is on leave.
///
/// Expected: Ok with the group for the teacher, nothing for the secretary
#[tokio::test]
async fn referent_teacher_holds_authority_during_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, true).await?;

    let repo = GroupRepository::new(db);

    let secretary_groups = repo.acting_for(Some(chain.secretary.id), None).await?;
    assert!(secretary_groups.is_empty());

    let teacher_groups = repo.acting_for(None, Some(chain.teacher.id)).await?;
    assert_eq!(teacher_groups, vec![chain.group.id]);

    Ok(())
}

/// Tests that a teacher only substitutes for the groups they are referent of.
///
/// Expected: Ok without the group of another teacher
#[tokio::test]
async fn ignores_groups_with_other_referent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chain = factory::helpers::create_delegation_chain(db, true).await?;
    let other_teacher = factory::create_teacher(db).await?;
    factory::student_group::GroupFactory::new(db, chain.secretary.id)
        .referent_teacher(other_teacher.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let groups = repo.acting_for(None, Some(chain.teacher.id)).await?;

    assert_eq!(groups, vec![chain.group.id]);

    Ok(())
}
