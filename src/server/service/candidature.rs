use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{candidature::CandidatureRepository, offer::OfferRepository},
    error::AppError,
    model::{
        candidature::{CandidatureStatus, ReceivedCandidature, StudentCandidature},
        offer::OfferStatus,
    },
};

/// Applications and the decisions taken on them.
pub struct CandidatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidatureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Candidatures received on the company's offers, newest first.
    pub async fn list_received(
        &self,
        company_id: i32,
        offer_id: Option<i32>,
    ) -> Result<Vec<ReceivedCandidature>, AppError> {
        CandidatureRepository::new(self.db)
            .list_received(company_id, offer_id)
            .await
    }

    /// Retains or refuses a pending candidature on one of the company's offers.
    ///
    /// The status change is a single write conditional on the candidature still being
    /// EN_ATTENTE and targeting an offer of `company_id`, so deciding twice always fails.
    ///
    /// # Arguments
    /// - `decision` - `RETENU` or `REFUSE`
    ///
    /// # Returns
    /// - `Ok(CandidatureStatus)` - The new status
    /// - `Err(AppError::Validation)` - Unknown decision
    /// - `Err(AppError::NotFound)` - Candidature absent or on another company's offer
    /// - `Err(AppError::Conflict)` - Candidature already decided or cancelled
    pub async fn decide(
        &self,
        company_id: i32,
        candidature_id: i32,
        decision: &str,
    ) -> Result<CandidatureStatus, AppError> {
        let to = CandidatureStatus::from_company_decision(decision)?;
        let from = CandidatureStatus::EnAttente;
        ensure_transition(from, to)?;

        let txn = self.db.begin().await?;
        let candidatures = CandidatureRepository::new(&txn);

        let rows = candidatures
            .transition_for_company(company_id, candidature_id, from, to)
            .await?;
        if rows == 0 {
            return Err(
                if candidatures
                    .is_visible_to_company(company_id, candidature_id)
                    .await?
                {
                    AppError::Conflict("Candidature has already been decided".to_string())
                } else {
                    candidature_not_found()
                },
            );
        }

        txn.commit().await?;

        tracing::info!(
            "Company {} moved candidature {} to {}",
            company_id,
            candidature_id,
            to.as_str()
        );

        Ok(to)
    }

    /// Applies to a validated offer.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new EN_ATTENTE candidature
    /// - `Err(AppError::NotFound)` - Offer absent or not validated
    /// - `Err(AppError::Conflict)` - Offer expired, or the student already has a pending
    ///   or retained candidature on it
    pub async fn apply(&self, student_id: i32, offer_id: i32) -> Result<i32, AppError> {
        let now = Utc::now();

        let txn = self.db.begin().await?;
        let candidatures = CandidatureRepository::new(&txn);

        let offer = OfferRepository::new(&txn).find_by_id(offer_id).await?;
        let Some(offer) = offer.filter(|o| o.validation_status == OfferStatus::Validated.as_str())
        else {
            return Err(AppError::NotFound("Offer not found".to_string()));
        };
        if offer.expiration_date < now.date_naive() {
            return Err(AppError::Conflict("Offer has expired".to_string()));
        }
        if candidatures.has_active(student_id, offer_id).await? {
            return Err(AppError::Conflict(
                "You already applied to this offer".to_string(),
            ));
        }

        let candidature = candidatures.create(offer_id, student_id, now).await?;

        txn.commit().await?;

        tracing::info!(
            "Student {} applied to offer {} (candidature {})",
            student_id,
            offer_id,
            candidature.id
        );

        Ok(candidature.id)
    }

    /// Withdraws a pending candidature made by the student.
    ///
    /// # Returns
    /// - `Ok(())` - Candidature is now ANNULE
    /// - `Err(AppError::NotFound)` - Candidature absent or made by another student
    /// - `Err(AppError::Conflict)` - Company already decided
    pub async fn cancel(&self, student_id: i32, candidature_id: i32) -> Result<(), AppError> {
        let from = CandidatureStatus::EnAttente;
        let to = CandidatureStatus::Annule;
        ensure_transition(from, to)?;

        let txn = self.db.begin().await?;
        let candidatures = CandidatureRepository::new(&txn);

        let rows = candidatures
            .transition_for_student(student_id, candidature_id, from, to)
            .await?;
        if rows == 0 {
            let owned = candidatures
                .find_by_id(candidature_id)
                .await?
                .is_some_and(|c| c.student_id == student_id);
            return Err(if owned {
                AppError::Conflict("Candidature can no longer be cancelled".to_string())
            } else {
                candidature_not_found()
            });
        }

        txn.commit().await?;

        tracing::info!(
            "Student {} cancelled candidature {}",
            student_id,
            candidature_id
        );

        Ok(())
    }

    pub async fn list_mine(&self, student_id: i32) -> Result<Vec<StudentCandidature>, AppError> {
        CandidatureRepository::new(self.db)
            .list_for_student(student_id)
            .await
    }
}

/// Rejects a status change the candidature state machine does not allow.
pub(crate) fn ensure_transition(
    from: CandidatureStatus,
    to: CandidatureStatus,
) -> Result<(), AppError> {
    if from.can_transition(to) {
        Ok(())
    } else {
        Err(AppError::Conflict(format!(
            "Candidature cannot move from {} to {}",
            from.as_str(),
            to.as_str()
        )))
    }
}

pub(crate) fn candidature_not_found() -> AppError {
    AppError::NotFound("Candidature not found".to_string())
}
