//! RC attestation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for a student's liability insurance attestation.
pub struct AttestationFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    status: String,
    file_url: String,
}

impl<'a> AttestationFactory<'a> {
    /// Defaults: status `"EN_ATTENTE"`, file `"/uploads/rc/{student_id}.pdf"`.
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            status: "EN_ATTENTE".to_string(),
            file_url: format!("/uploads/rc/{}.pdf", student_id),
        }
    }

    /// Sets the status (`EN_ATTENTE`, `VALIDE` or `REFUSE`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn file_url(mut self, file_url: impl Into<String>) -> Self {
        self.file_url = file_url.into();
        self
    }

    pub async fn build(self) -> Result<entity::rc_attestation::Model, DbErr> {
        entity::rc_attestation::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            status: ActiveValue::Set(self.status),
            file_url: ActiveValue::Set(self.file_url),
            deposited_at: ActiveValue::Set(Utc::now()),
            validated_at: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an EN_ATTENTE attestation for `student_id`.
pub async fn create_attestation(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::rc_attestation::Model, DbErr> {
    AttestationFactory::new(db, student_id).build().await
}
