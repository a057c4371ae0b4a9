use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        affectation::AffectationRepository, attestation::AttestationRepository,
        group::GroupRepository, profile::ProfileRepository,
    },
    error::AppError,
    model::{
        attestation::AttestationStatus,
        principal::Principal,
        secretary::{CreateStudentParam, DeskStats},
    },
    service::auth::NewAccount,
};

/// Secretary dashboard and student enrolment.
///
/// Both operations are scoped to the groups the caller currently acts for, so a referent
/// teacher standing in for a secretary on leave sees and enrols into that secretary's
/// groups. Admins act for every group.
pub struct SecretaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SecretaryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counters over the caller's acting groups.
    pub async fn stats(&self, principal: &Principal) -> Result<DeskStats, AppError> {
        let group_ids = acting_scope(self.db, principal).await?;
        if group_ids.is_empty() {
            return Ok(DeskStats::default());
        }

        let attestations = AttestationRepository::new(self.db);

        Ok(DeskStats {
            groups: group_ids.len() as u64,
            students: ProfileRepository::new(self.db)
                .count_students_in(&group_ids)
                .await?,
            pending_attestations: attestations
                .count_in_groups(&group_ids, AttestationStatus::EnAttente)
                .await?,
            validated_attestations: attestations
                .count_in_groups(&group_ids, AttestationStatus::Valide)
                .await?,
            placed_students: AffectationRepository::new(self.db)
                .count_placed_students(&group_ids)
                .await?,
        })
    }

    /// Creates a student account in one of the caller's acting groups.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new student profile
    /// - `Err(AppError::Validation)` - Malformed email, short password or blank name
    /// - `Err(AppError::NotFound)` - No such group
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller does not act for the group
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create_student(
        &self,
        principal: &Principal,
        param: CreateStudentParam,
    ) -> Result<i32, AppError> {
        let account = NewAccount::prepare(&param.email, &param.password, &param.name)?;

        let txn = self.db.begin().await?;

        if GroupRepository::new(&txn)
            .find_by_id(param.group_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Group not found".to_string()));
        }
        if !acting_scope(&txn, principal).await?.contains(&param.group_id) {
            return Err(principal.denied("not acting secretary for the group").into());
        }

        let user = account.insert(&txn).await?;
        let student = ProfileRepository::new(&txn)
            .create_student(user.id, param.group_id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} enrolled student {} in group {}",
            principal.user_id,
            student.id,
            param.group_id
        );

        Ok(student.id)
    }
}

async fn acting_scope<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
) -> Result<Vec<i32>, DbErr> {
    let groups = GroupRepository::new(db);
    if principal.admin {
        groups.all_ids().await
    } else {
        groups
            .acting_for(principal.secretary_id, principal.teacher_id)
            .await
    }
}
