use chrono::Utc;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{affectation::AffectationRepository, candidature::CandidatureRepository},
    error::AppError,
    model::{affectation::PendingAffectation, candidature::CandidatureStatus},
    service::candidature::{candidature_not_found, ensure_transition},
};

/// Pedagogical confirmation of retained candidatures.
pub struct AffectationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AffectationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retained candidatures still waiting for a placement, oldest application first.
    pub async fn list_pending(&self) -> Result<Vec<PendingAffectation>, AppError> {
        CandidatureRepository::new(self.db)
            .list_retained_without_affectation()
            .await
    }

    /// Turns a retained candidature into a placement.
    ///
    /// # Arguments
    /// - `validated_by` - User id of the staff member confirming the placement
    /// - `candidature_id` - Candidature to place
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new affectation
    /// - `Err(AppError::NotFound)` - No such candidature
    /// - `Err(AppError::Conflict)` - Already placed, or not RETENU
    pub async fn validate(&self, validated_by: i32, candidature_id: i32) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;
        let affectations = AffectationRepository::new(&txn);
        let candidatures = CandidatureRepository::new(&txn);

        if candidatures.find_by_id(candidature_id).await?.is_none() {
            return Err(candidature_not_found());
        }
        if affectations.exists_for_candidature(candidature_id).await? {
            return Err(already_placed());
        }
        if candidatures
            .hold_status(candidature_id, CandidatureStatus::Retenu)
            .await?
            == 0
        {
            return Err(AppError::Conflict(
                "Only retained candidatures can be placed".to_string(),
            ));
        }

        let affectation = affectations
            .create(candidature_id, validated_by, Utc::now())
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => already_placed(),
                _ => AppError::DbErr(err),
            })?;

        txn.commit().await?;

        tracing::info!(
            "User {} confirmed placement {} for candidature {}",
            validated_by,
            affectation.id,
            candidature_id
        );

        Ok(affectation.id)
    }

    /// Refuses a retained candidature on pedagogical grounds.
    ///
    /// # Returns
    /// - `Ok(())` - Candidature is now REFUSE
    /// - `Err(AppError::NotFound)` - No such candidature
    /// - `Err(AppError::Conflict)` - Already placed, or not RETENU
    pub async fn refuse(&self, candidature_id: i32) -> Result<(), AppError> {
        let from = CandidatureStatus::Retenu;
        let to = CandidatureStatus::Refuse;
        ensure_transition(from, to)?;

        let txn = self.db.begin().await?;
        let candidatures = CandidatureRepository::new(&txn);

        if candidatures.find_by_id(candidature_id).await?.is_none() {
            return Err(candidature_not_found());
        }
        if AffectationRepository::new(&txn)
            .exists_for_candidature(candidature_id)
            .await?
        {
            return Err(already_placed());
        }
        if candidatures.transition(candidature_id, from, to).await? == 0 {
            return Err(AppError::Conflict(
                "Only retained candidatures can be refused".to_string(),
            ));
        }

        txn.commit().await?;

        tracing::info!("Candidature {} refused at placement review", candidature_id);

        Ok(())
    }
}

fn already_placed() -> AppError {
    AppError::Conflict("Candidature already has a placement".to_string())
}

