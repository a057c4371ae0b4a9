//! Affectation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an affectation for `candidature_id`, confirmed by user `validated_by`.
pub async fn create_affectation(
    db: &DatabaseConnection,
    candidature_id: i32,
    validated_by: i32,
) -> Result<entity::affectation::Model, DbErr> {
    entity::affectation::ActiveModel {
        candidature_id: ActiveValue::Set(candidature_id),
        validated_by: ActiveValue::Set(validated_by),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
