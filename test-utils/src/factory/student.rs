//! Student profile factory.

use crate::factory::user::create_user;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a student profile for an existing user.
pub async fn create_student_for_user(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: Option<i32>,
) -> Result<entity::student::Model, DbErr> {
    entity::student::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a user and a student profile outside of any group.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    let user = create_user(db).await?;
    create_student_for_user(db, user.id, None).await
}

/// Creates a user and a student profile enrolled in `group_id`.
pub async fn create_student_in_group(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<entity::student::Model, DbErr> {
    let user = create_user(db).await?;
    create_student_for_user(db, user.id, Some(group_id)).await
}
