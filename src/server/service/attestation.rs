use chrono::{DateTime, Duration, Months, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        attestation::AttestationRepository, group::GroupRepository, profile::ProfileRepository,
    },
    error::AppError,
    model::{
        attestation::{AttestationForReview, AttestationStatus},
        principal::Principal,
    },
};

/// RC attestation deposit and review.
///
/// Review authority follows delegation: the group's secretary while present, the group's
/// referent teacher while the secretary is on leave. Admins may review any attestation.
pub struct AttestationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttestationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// EN_ATTENTE attestations the principal may review, oldest deposit first.
    pub async fn list_to_review(
        &self,
        principal: &Principal,
    ) -> Result<Vec<AttestationForReview>, AppError> {
        let group_ids = if principal.admin {
            None
        } else {
            Some(
                GroupRepository::new(self.db)
                    .acting_for(principal.secretary_id, principal.teacher_id)
                    .await?,
            )
        };

        AttestationRepository::new(self.db)
            .list_pending(group_ids)
            .await
    }

    /// Validates or refuses a student's attestation.
    ///
    /// A validated attestation expires one year after review.
    ///
    /// # Arguments
    /// - `decision` - `VALIDE` or `REFUSE`
    ///
    /// # Returns
    /// - `Ok(AttestationStatus)` - The new status
    /// - `Err(AppError::Validation)` - Unknown decision
    /// - `Err(AppError::NotFound)` - Student has no attestation
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the acting secretary of
    ///   the student's group
    /// - `Err(AppError::Conflict)` - Attestation already reviewed
    pub async fn review(
        &self,
        principal: &Principal,
        student_id: i32,
        decision: &str,
    ) -> Result<AttestationStatus, AppError> {
        let status = AttestationStatus::from_review_decision(decision)?;
        let now = Utc::now();

        let txn = self.db.begin().await?;
        let attestations = AttestationRepository::new(&txn);

        let Some(attestation) = attestations.find_by_student(student_id).await? else {
            return Err(AppError::NotFound("Attestation not found".to_string()));
        };

        if !principal.admin {
            let group_id = ProfileRepository::new(&txn)
                .find_student(student_id)
                .await?
                .and_then(|student| student.group_id);
            let acting = GroupRepository::new(&txn)
                .acting_for(principal.secretary_id, principal.teacher_id)
                .await?;

            if !group_id.is_some_and(|id| acting.contains(&id)) {
                return Err(principal
                    .denied("not acting secretary for the student's group")
                    .into());
            }
        }

        if AttestationStatus::from_db(&attestation.status)? != AttestationStatus::EnAttente {
            return Err(already_reviewed());
        }

        let expires_at = match status {
            AttestationStatus::Valide => Some(one_year_after(now)),
            _ => None,
        };
        if attestations
            .review(student_id, status, now, expires_at)
            .await?
            == 0
        {
            return Err(already_reviewed());
        }

        txn.commit().await?;

        tracing::info!(
            "User {} reviewed attestation of student {} as {}",
            principal.user_id,
            student_id,
            status.as_str()
        );

        Ok(status)
    }

    /// Deposits or replaces the student's attestation, putting it back in review.
    ///
    /// # Returns
    /// - `Ok(())` - Attestation stored as EN_ATTENTE
    /// - `Err(AppError::Validation)` - Blank file URL
    pub async fn submit(&self, student_id: i32, file_url: &str) -> Result<(), AppError> {
        let file_url = file_url.trim();
        if file_url.is_empty() {
            return Err(AppError::Validation("fileUrl is required".to_string()));
        }

        AttestationRepository::new(self.db)
            .upsert(student_id, file_url.to_string(), Utc::now())
            .await?;

        tracing::info!("Student {} deposited an RC attestation", student_id);

        Ok(())
    }
}

fn one_year_after(at: DateTime<Utc>) -> DateTime<Utc> {
    at.checked_add_months(Months::new(12))
        .unwrap_or(at + Duration::days(365))
}

fn already_reviewed() -> AppError {
    AppError::Conflict("Attestation has already been reviewed".to_string())
}
