use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::offer::{OfferFields, OfferStatus};

pub struct OfferRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfferRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new PENDING offer submitted at `now`.
    pub async fn create(
        &self,
        company_id: i32,
        fields: OfferFields,
        now: DateTime<Utc>,
    ) -> Result<entity::offer::Model, DbErr> {
        entity::offer::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            offer_type: ActiveValue::Set(fields.offer_type),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            skills: ActiveValue::Set(fields.skills),
            country: ActiveValue::Set(fields.country),
            city: ActiveValue::Set(fields.city),
            duration_months: ActiveValue::Set(fields.duration_months),
            remuneration: ActiveValue::Set(fields.remuneration),
            start_date: ActiveValue::Set(fields.start_date),
            expiration_date: ActiveValue::Set(fields.expiration_date),
            validation_status: ActiveValue::Set(OfferStatus::Pending.as_str().to_string()),
            submitted_at: ActiveValue::Set(now),
            validated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, offer_id: i32) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(offer_id)
            .one(self.db)
            .await
    }

    /// Finds an offer only if it belongs to `company_id`.
    pub async fn find_owned(
        &self,
        company_id: i32,
        offer_id: i32,
    ) -> Result<Option<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find_by_id(offer_id)
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Offers of a company, most recently submitted first.
    pub async fn list_by_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::offer::Model>, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .order_by_desc(entity::offer::Column::SubmittedAt)
            .order_by_desc(entity::offer::Column::Id)
            .all(self.db)
            .await
    }

    /// PENDING offers with their company, oldest submission first.
    pub async fn list_pending_with_company(
        &self,
    ) -> Result<Vec<(entity::offer::Model, Option<entity::company::Model>)>, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::ValidationStatus.eq(OfferStatus::Pending.as_str()))
            .find_also_related(entity::prelude::Company)
            .order_by_asc(entity::offer::Column::SubmittedAt)
            .order_by_asc(entity::offer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_status(
        &self,
        company_id: i32,
        status: OfferStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Offer::find()
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .filter(entity::offer::Column::ValidationStatus.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Overwrites the offer fields, scoped to the owning company.
    ///
    /// With `revalidate` the offer also returns to PENDING, its submission date becomes
    /// `now` and its validation date is cleared. Otherwise the status is left untouched.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated, 0 when the offer is absent or not owned
    pub async fn update_owned(
        &self,
        company_id: i32,
        offer_id: i32,
        fields: OfferFields,
        revalidate: bool,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let mut changes = entity::offer::ActiveModel {
            offer_type: ActiveValue::Set(fields.offer_type),
            title: ActiveValue::Set(fields.title),
            description: ActiveValue::Set(fields.description),
            skills: ActiveValue::Set(fields.skills),
            country: ActiveValue::Set(fields.country),
            city: ActiveValue::Set(fields.city),
            duration_months: ActiveValue::Set(fields.duration_months),
            remuneration: ActiveValue::Set(fields.remuneration),
            start_date: ActiveValue::Set(fields.start_date),
            expiration_date: ActiveValue::Set(fields.expiration_date),
            ..Default::default()
        };

        if revalidate {
            changes.validation_status =
                ActiveValue::Set(OfferStatus::Pending.as_str().to_string());
            changes.submitted_at = ActiveValue::Set(now);
            changes.validated_at = ActiveValue::Set(None);
        }

        let result = entity::prelude::Offer::update_many()
            .set(changes)
            .filter(entity::offer::Column::Id.eq(offer_id))
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a PENDING offer to `status` and stamps the validation date.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the offer is absent or no longer PENDING
    pub async fn review(
        &self,
        offer_id: i32,
        status: OfferStatus,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Offer::update_many()
            .set(entity::offer::ActiveModel {
                validation_status: ActiveValue::Set(status.as_str().to_string()),
                validated_at: ActiveValue::Set(Some(now)),
                ..Default::default()
            })
            .filter(entity::offer::Column::Id.eq(offer_id))
            .filter(entity::offer::Column::ValidationStatus.eq(OfferStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_owned(&self, company_id: i32, offer_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Offer::delete_many()
            .filter(entity::offer::Column::Id.eq(offer_id))
            .filter(entity::offer::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
