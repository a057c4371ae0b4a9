use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{group::GroupRepository, leave::LeaveRepository},
    error::AppError,
    model::{
        leave::{LeaveLogEntry, LeaveStatus},
        principal::Principal,
    },
};

/// Secretary leave mode and the delegation of authority it implies.
///
/// The substitute list is always derived from the current group referents; only the
/// `on_leave` flag decides whether those teachers actually hold authority.
pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Current flag and substitutes of a secretary.
    ///
    /// # Returns
    /// - `Ok(LeaveStatus)` - Flag and substitutes, regardless of the flag's value
    /// - `Err(AppError::NotFound)` - No such secretary
    pub async fn status(&self, secretary_id: i32) -> Result<LeaveStatus, AppError> {
        let Some(secretary) = LeaveRepository::new(self.db)
            .find_secretary(secretary_id)
            .await?
        else {
            return Err(secretary_not_found());
        };

        let substitutes = GroupRepository::new(self.db)
            .substitutes(secretary_id)
            .await?;

        Ok(LeaveStatus {
            on_leave: secretary.on_leave,
            substitutes,
        })
    }

    /// Sets the leave flag and appends the change to the leave log.
    ///
    /// Setting the flag to its current value still records a log entry.
    ///
    /// # Returns
    /// - `Ok(LeaveStatus)` - The new flag with the substitutes
    /// - `Err(AppError::NotFound)` - No such secretary
    pub async fn toggle(&self, secretary_id: i32, enabled: bool) -> Result<LeaveStatus, AppError> {
        let txn = self.db.begin().await?;
        let leave = LeaveRepository::new(&txn);

        if leave.set_on_leave(secretary_id, enabled).await? == 0 {
            return Err(secretary_not_found());
        }
        leave.append_log(secretary_id, enabled, Utc::now()).await?;

        let substitutes = GroupRepository::new(&txn)
            .substitutes(secretary_id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Secretary {} {} leave mode ({} substitutes)",
            secretary_id,
            if enabled { "enabled" } else { "disabled" },
            substitutes.len()
        );

        Ok(LeaveStatus {
            on_leave: enabled,
            substitutes,
        })
    }

    /// Leave log of the secretary, newest first.
    pub async fn history(&self, secretary_id: i32) -> Result<Vec<LeaveLogEntry>, AppError> {
        Ok(LeaveRepository::new(self.db)
            .history(secretary_id)
            .await?
            .into_iter()
            .map(LeaveLogEntry::from_entity)
            .collect())
    }

    /// Groups over which the principal currently holds secretary authority.
    pub async fn acting_group_ids(&self, principal: &Principal) -> Result<Vec<i32>, AppError> {
        Ok(GroupRepository::new(self.db)
            .acting_for(principal.secretary_id, principal.teacher_id)
            .await?)
    }
}

fn secretary_not_found() -> AppError {
    AppError::NotFound("Secretary not found".to_string())
}
