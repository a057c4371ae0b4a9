use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{group::GroupRepository, profile::ProfileRepository},
    error::AppError,
    model::attestation::{AttestationForReview, AttestationStatus},
};

pub struct AttestationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttestationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_student(
        &self,
        student_id: i32,
    ) -> Result<Option<entity::rc_attestation::Model>, DbErr> {
        entity::prelude::RcAttestation::find_by_id(student_id)
            .one(self.db)
            .await
    }

    /// Deposits or replaces a student's attestation, resetting it to EN_ATTENTE.
    pub async fn upsert(
        &self,
        student_id: i32,
        file_url: String,
        now: DateTime<Utc>,
    ) -> Result<entity::rc_attestation::Model, DbErr> {
        entity::prelude::RcAttestation::insert(entity::rc_attestation::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            status: ActiveValue::Set(AttestationStatus::EnAttente.as_str().to_string()),
            file_url: ActiveValue::Set(file_url),
            deposited_at: ActiveValue::Set(now),
            validated_at: ActiveValue::Set(None),
            expires_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::rc_attestation::Column::StudentId)
                .update_columns([
                    entity::rc_attestation::Column::Status,
                    entity::rc_attestation::Column::FileUrl,
                    entity::rc_attestation::Column::DepositedAt,
                    entity::rc_attestation::Column::ValidatedAt,
                    entity::rc_attestation::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Records a review decision on an EN_ATTENTE attestation.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when absent or already reviewed
    pub async fn review(
        &self,
        student_id: i32,
        status: AttestationStatus,
        now: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::RcAttestation::update_many()
            .set(entity::rc_attestation::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                validated_at: ActiveValue::Set(Some(now)),
                expires_at: ActiveValue::Set(expires_at),
                ..Default::default()
            })
            .filter(entity::rc_attestation::Column::StudentId.eq(student_id))
            .filter(
                entity::rc_attestation::Column::Status.eq(AttestationStatus::EnAttente.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts the attestations in `status` held by students of the given groups.
    pub async fn count_in_groups(
        &self,
        group_ids: &[i32],
        status: AttestationStatus,
    ) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::RcAttestation::find()
            .inner_join(entity::prelude::Student)
            .filter(entity::rc_attestation::Column::Status.eq(status.as_str()))
            .filter(entity::student::Column::GroupId.is_in(group_ids.to_vec()))
            .count(self.db)
            .await
    }

    /// EN_ATTENTE attestations, oldest deposit first.
    ///
    /// # Arguments
    /// - `group_ids` - `None` lists every student; `Some` restricts to students of those
    ///   groups (an empty slice yields nothing)
    pub async fn list_pending(
        &self,
        group_ids: Option<Vec<i32>>,
    ) -> Result<Vec<AttestationForReview>, AppError> {
        if matches!(&group_ids, Some(ids) if ids.is_empty()) {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::RcAttestation::find()
            .find_also_related(entity::prelude::Student)
            .filter(
                entity::rc_attestation::Column::Status.eq(AttestationStatus::EnAttente.as_str()),
            );
        if let Some(ids) = group_ids {
            query = query.filter(entity::student::Column::GroupId.is_in(ids));
        }
        let rows = query
            .order_by_asc(entity::rc_attestation::Column::DepositedAt)
            .order_by_asc(entity::rc_attestation::Column::StudentId)
            .all(self.db)
            .await?;

        let users = ProfileRepository::new(self.db)
            .users_for_students(rows.iter().map(|(a, _)| a.student_id).collect())
            .await?;
        let group_names = GroupRepository::new(self.db)
            .names(
                rows.iter()
                    .filter_map(|(_, s)| s.as_ref().and_then(|s| s.group_id))
                    .collect(),
            )
            .await?;

        rows.into_iter()
            .map(|(attestation, student)| -> Result<AttestationForReview, AppError> {
                let user = users.get(&attestation.student_id);
                Ok(AttestationForReview {
                    student_id: attestation.student_id,
                    student_name: user.map(|u| u.name.clone()).unwrap_or_default(),
                    student_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    group_name: student
                        .and_then(|s| s.group_id)
                        .and_then(|id| group_names.get(&id).cloned()),
                    status: AttestationStatus::from_db(&attestation.status)?,
                    file_url: attestation.file_url,
                    deposited_at: attestation.deposited_at,
                })
            })
            .collect()
    }
}
