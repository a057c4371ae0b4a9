//! Teacher profile factory.

use crate::factory::user::create_user;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a teacher profile for an existing user.
pub async fn create_teacher_for_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::teacher::Model, DbErr> {
    entity::teacher::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a user and a teacher profile for it.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    let user = create_user(db).await?;
    create_teacher_for_user(db, user.id).await
}
