use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashSet;

pub struct AffectationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AffectationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists_for_candidature(&self, candidature_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Affectation::find()
            .filter(entity::affectation::Column::CandidatureId.eq(candidature_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether any candidature on the offer has been turned into a placement.
    pub async fn exists_for_offer(&self, offer_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Affectation::find()
            .inner_join(entity::prelude::Candidature)
            .filter(entity::candidature::Column::OfferId.eq(offer_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of distinct students of the given groups holding a placement.
    pub async fn count_placed_students(&self, group_ids: &[i32]) -> Result<u64, DbErr> {
        if group_ids.is_empty() {
            return Ok(0);
        }

        let placed: HashSet<i32> = entity::prelude::Candidature::find()
            .inner_join(entity::prelude::Affectation)
            .inner_join(entity::prelude::Student)
            .filter(entity::student::Column::GroupId.is_in(group_ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|candidature| candidature.student_id)
            .collect();

        Ok(placed.len() as u64)
    }

    /// Inserts the placement. The unique index on `candidature_id` rejects a second one.
    pub async fn create(
        &self,
        candidature_id: i32,
        validated_by: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::affectation::Model, DbErr> {
        entity::affectation::ActiveModel {
            candidature_id: ActiveValue::Set(candidature_id),
            validated_by: ActiveValue::Set(validated_by),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
