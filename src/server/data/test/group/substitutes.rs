use super::*;

use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests computing the substitute list of a secretary.
///
/// Verifies that the list is ordered by teacher name, skips groups without a referent and
/// ignores the leave flag.
///
/// Expected: Ok with one entry per referenced group, sorted by name
#[tokio::test]
async fn lists_referent_teachers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_placement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let secretary = factory::create_secretary(db).await?;

    let zoe_user = factory::user::UserFactory::new(db)
        .name("Zoe Martin")
        .build()
        .await?;
    let zoe = factory::teacher::create_teacher_for_user(db, zoe_user.id).await?;
    let adam_user = factory::user::UserFactory::new(db)
        .name("Adam Petit")
        .build()
        .await?;
    let adam = factory::teacher::create_teacher_for_user(db, adam_user.id).await?;

    factory::student_group::GroupFactory::new(db, secretary.id)
        .name("BTS SIO 1")
        .referent_teacher(zoe.id)
        .build()
        .await?;
    factory::student_group::GroupFactory::new(db, secretary.id)
        .name("BTS SIO 2")
        .referent_teacher(adam.id)
        .build()
        .await?;
    factory::student_group::GroupFactory::new(db, secretary.id)
        .name("No referent")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let before = repo.substitutes(secretary.id).await?;

    assert_eq!(before.len(), 2);
    assert_eq!(before[0].name, "Adam Petit");
    assert_eq!(before[0].group_name, "BTS SIO 2");
    assert_eq!(before[0].teacher_user_id, adam_user.id);
    assert_eq!(before[1].name, "Zoe Martin");
    assert_eq!(before[1].email, zoe_user.email);

    // The flag does not change the derived list
    entity::secretary::ActiveModel {
        id: ActiveValue::Unchanged(secretary.id),
        on_leave: ActiveValue::Set(true),
        ..Default::default()
    }
    .update(db)
    .await?;

    let after = repo.substitutes(secretary.id).await?;
    assert_eq!(after, before);

    Ok(())
}
