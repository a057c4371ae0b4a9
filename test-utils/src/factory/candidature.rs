//! Candidature factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for candidatures of a student on an offer.
pub struct CandidatureFactory<'a> {
    db: &'a DatabaseConnection,
    offer_id: i32,
    student_id: i32,
    status: String,
    applied_at: chrono::DateTime<Utc>,
}

impl<'a> CandidatureFactory<'a> {
    /// Defaults: status `"EN_ATTENTE"`, applied now.
    pub fn new(db: &'a DatabaseConnection, offer_id: i32, student_id: i32) -> Self {
        Self {
            db,
            offer_id,
            student_id,
            status: "EN_ATTENTE".to_string(),
            applied_at: Utc::now(),
        }
    }

    /// Sets the status (`EN_ATTENTE`, `RETENU`, `REFUSE` or `ANNULE`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn applied_at(mut self, applied_at: chrono::DateTime<Utc>) -> Self {
        self.applied_at = applied_at;
        self
    }

    pub async fn build(self) -> Result<entity::candidature::Model, DbErr> {
        entity::candidature::ActiveModel {
            offer_id: ActiveValue::Set(self.offer_id),
            student_id: ActiveValue::Set(self.student_id),
            status: ActiveValue::Set(self.status),
            applied_at: ActiveValue::Set(self.applied_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an EN_ATTENTE candidature.
pub async fn create_candidature(
    db: &DatabaseConnection,
    offer_id: i32,
    student_id: i32,
) -> Result<entity::candidature::Model, DbErr> {
    CandidatureFactory::new(db, offer_id, student_id)
        .build()
        .await
}
