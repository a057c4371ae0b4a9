//! Secretary leave flag and its append-only log.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct LeaveRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeaveRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_secretary(
        &self,
        secretary_id: i32,
    ) -> Result<Option<entity::secretary::Model>, DbErr> {
        entity::prelude::Secretary::find_by_id(secretary_id)
            .one(self.db)
            .await
    }

    /// Sets the current leave flag.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the secretary does not exist
    pub async fn set_on_leave(&self, secretary_id: i32, on_leave: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::Secretary::update_many()
            .set(entity::secretary::ActiveModel {
                on_leave: ActiveValue::Set(on_leave),
                ..Default::default()
            })
            .filter(entity::secretary::Column::Id.eq(secretary_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn append_log(
        &self,
        secretary_id: i32,
        on_leave: bool,
        now: DateTime<Utc>,
    ) -> Result<entity::secretary_leave_log::Model, DbErr> {
        entity::secretary_leave_log::ActiveModel {
            secretary_id: ActiveValue::Set(secretary_id),
            on_leave: ActiveValue::Set(on_leave),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Leave log of one secretary, newest entry first.
    pub async fn history(
        &self,
        secretary_id: i32,
    ) -> Result<Vec<entity::secretary_leave_log::Model>, DbErr> {
        entity::prelude::SecretaryLeaveLog::find()
            .filter(entity::secretary_leave_log::Column::SecretaryId.eq(secretary_id))
            .order_by_desc(entity::secretary_leave_log::Column::CreatedAt)
            .order_by_desc(entity::secretary_leave_log::Column::Id)
            .all(self.db)
            .await
    }
}
