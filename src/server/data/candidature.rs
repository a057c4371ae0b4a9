//! Candidature repository.
//!
//! Status changes go through the `transition_*` methods, which are conditional writes on
//! the expected prior status. A zero row count means the candidature was absent, not
//! visible to the caller, or already moved on.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::{
        affectation::PendingAffectation,
        candidature::{CandidatureStatus, ReceivedCandidature, StudentCandidature},
    },
};

pub struct CandidatureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidatureRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        candidature_id: i32,
    ) -> Result<Option<entity::candidature::Model>, DbErr> {
        entity::prelude::Candidature::find_by_id(candidature_id)
            .one(self.db)
            .await
    }

    /// Inserts an EN_ATTENTE candidature.
    pub async fn create(
        &self,
        offer_id: i32,
        student_id: i32,
        now: DateTime<Utc>,
    ) -> Result<entity::candidature::Model, DbErr> {
        entity::candidature::ActiveModel {
            offer_id: ActiveValue::Set(offer_id),
            student_id: ActiveValue::Set(student_id),
            status: ActiveValue::Set(CandidatureStatus::EnAttente.as_str().to_string()),
            applied_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn count_for_offer(
        &self,
        offer_id: i32,
        statuses: &[CandidatureStatus],
    ) -> Result<u64, DbErr> {
        entity::prelude::Candidature::find()
            .filter(entity::candidature::Column::OfferId.eq(offer_id))
            .filter(entity::candidature::Column::Status.is_in(status_values(statuses)))
            .count(self.db)
            .await
    }

    pub async fn delete_for_offer(
        &self,
        offer_id: i32,
        statuses: &[CandidatureStatus],
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Candidature::delete_many()
            .filter(entity::candidature::Column::OfferId.eq(offer_id))
            .filter(entity::candidature::Column::Status.is_in(status_values(statuses)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts live candidatures (neither refused nor cancelled) across a company's offers.
    pub async fn count_open_for_company(&self, company_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Candidature::find()
            .filter(entity::candidature::Column::OfferId.in_subquery(company_offers(company_id)))
            .filter(
                entity::candidature::Column::Status
                    .is_not_in(status_values(&CandidatureStatus::CLOSED)),
            )
            .count(self.db)
            .await
    }

    /// Whether the student already has an EN_ATTENTE or RETENU candidature on the offer.
    pub async fn has_active(&self, student_id: i32, offer_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Candidature::find()
            .filter(entity::candidature::Column::StudentId.eq(student_id))
            .filter(entity::candidature::Column::OfferId.eq(offer_id))
            .filter(
                entity::candidature::Column::Status
                    .is_in(status_values(&CandidatureStatus::ACTIVE)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Whether the candidature targets one of the company's offers.
    pub async fn is_visible_to_company(
        &self,
        company_id: i32,
        candidature_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Candidature::find_by_id(candidature_id)
            .filter(entity::candidature::Column::OfferId.in_subquery(company_offers(company_id)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Moves a candidature from `from` to `to`, only if it is on one of the company's offers.
    pub async fn transition_for_company(
        &self,
        company_id: i32,
        candidature_id: i32,
        from: CandidatureStatus,
        to: CandidatureStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Candidature::update_many()
            .set(status_change(to))
            .filter(entity::candidature::Column::Id.eq(candidature_id))
            .filter(entity::candidature::Column::Status.eq(from.as_str()))
            .filter(entity::candidature::Column::OfferId.in_subquery(company_offers(company_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a candidature from `from` to `to`, only if the student made it.
    pub async fn transition_for_student(
        &self,
        student_id: i32,
        candidature_id: i32,
        from: CandidatureStatus,
        to: CandidatureStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Candidature::update_many()
            .set(status_change(to))
            .filter(entity::candidature::Column::Id.eq(candidature_id))
            .filter(entity::candidature::Column::Status.eq(from.as_str()))
            .filter(entity::candidature::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves a candidature from `from` to `to` regardless of owner.
    pub async fn transition(
        &self,
        candidature_id: i32,
        from: CandidatureStatus,
        to: CandidatureStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Candidature::update_many()
            .set(status_change(to))
            .filter(entity::candidature::Column::Id.eq(candidature_id))
            .filter(entity::candidature::Column::Status.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Rewrites the status in place when it still equals `status`.
    ///
    /// Inside a transaction this takes the row for the caller, so a concurrent status
    /// change cannot slip in before the transaction commits.
    ///
    /// # Returns
    /// - `Ok(rows)` - 0 when the candidature is absent or no longer in `status`
    pub async fn hold_status(
        &self,
        candidature_id: i32,
        status: CandidatureStatus,
    ) -> Result<u64, DbErr> {
        self.transition(candidature_id, status, status).await
    }

    /// Candidatures on the company's offers, newest application first.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `offer_id` - Optional restriction to one offer; an offer the company does not own
    ///   yields an empty list
    pub async fn list_received(
        &self,
        company_id: i32,
        offer_id: Option<i32>,
    ) -> Result<Vec<ReceivedCandidature>, AppError> {
        let mut offer_query = entity::prelude::Offer::find()
            .filter(entity::offer::Column::CompanyId.eq(company_id));
        if let Some(offer_id) = offer_id {
            offer_query = offer_query.filter(entity::offer::Column::Id.eq(offer_id));
        }
        let offer_titles: HashMap<i32, String> = offer_query
            .all(self.db)
            .await?
            .into_iter()
            .map(|offer| (offer.id, offer.title))
            .collect();

        if offer_titles.is_empty() {
            return Ok(Vec::new());
        }

        let candidatures = entity::prelude::Candidature::find()
            .filter(
                entity::candidature::Column::OfferId
                    .is_in(offer_titles.keys().copied().collect::<Vec<_>>()),
            )
            .order_by_desc(entity::candidature::Column::AppliedAt)
            .order_by_desc(entity::candidature::Column::Id)
            .all(self.db)
            .await?;

        let users = ProfileRepository::new(self.db)
            .users_for_students(candidatures.iter().map(|c| c.student_id).collect())
            .await?;

        candidatures
            .into_iter()
            .map(|candidature| -> Result<ReceivedCandidature, AppError> {
                let user = users.get(&candidature.student_id);
                Ok(ReceivedCandidature {
                    id: candidature.id,
                    offer_id: candidature.offer_id,
                    offer_title: offer_titles
                        .get(&candidature.offer_id)
                        .cloned()
                        .unwrap_or_default(),
                    student_id: candidature.student_id,
                    student_name: user.map(|u| u.name.clone()).unwrap_or_default(),
                    student_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    status: CandidatureStatus::from_db(&candidature.status)?,
                    applied_at: candidature.applied_at,
                })
            })
            .collect()
    }

    /// A student's own candidatures, newest first.
    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentCandidature>, AppError> {
        let rows = entity::prelude::Candidature::find()
            .filter(entity::candidature::Column::StudentId.eq(student_id))
            .find_also_related(entity::prelude::Offer)
            .order_by_desc(entity::candidature::Column::AppliedAt)
            .order_by_desc(entity::candidature::Column::Id)
            .all(self.db)
            .await?;

        let company_names = self
            .company_names(rows.iter().filter_map(|(_, o)| o.as_ref().map(|o| o.company_id)))
            .await?;

        rows.into_iter()
            .map(|(candidature, offer)| -> Result<StudentCandidature, AppError> {
                let (offer_title, company_name) = match offer {
                    Some(offer) => (
                        offer.title,
                        company_names
                            .get(&offer.company_id)
                            .cloned()
                            .unwrap_or_default(),
                    ),
                    None => (String::new(), String::new()),
                };
                Ok(StudentCandidature {
                    id: candidature.id,
                    offer_id: candidature.offer_id,
                    offer_title,
                    company_name,
                    status: CandidatureStatus::from_db(&candidature.status)?,
                    applied_at: candidature.applied_at,
                })
            })
            .collect()
    }

    /// RETENU candidatures that have no affectation yet, oldest application first.
    pub async fn list_retained_without_affectation(
        &self,
    ) -> Result<Vec<PendingAffectation>, AppError> {
        let placed = Query::select()
            .column(entity::affectation::Column::CandidatureId)
            .from(entity::prelude::Affectation)
            .to_owned();

        let rows = entity::prelude::Candidature::find()
            .filter(entity::candidature::Column::Status.eq(CandidatureStatus::Retenu.as_str()))
            .filter(entity::candidature::Column::Id.not_in_subquery(placed))
            .find_also_related(entity::prelude::Offer)
            .order_by_asc(entity::candidature::Column::AppliedAt)
            .order_by_asc(entity::candidature::Column::Id)
            .all(self.db)
            .await?;

        let company_names = self
            .company_names(rows.iter().filter_map(|(_, o)| o.as_ref().map(|o| o.company_id)))
            .await?;
        let users = ProfileRepository::new(self.db)
            .users_for_students(rows.iter().map(|(c, _)| c.student_id).collect())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(candidature, offer)| {
                let user = users.get(&candidature.student_id);
                let (offer_title, company_name) = match offer {
                    Some(offer) => (
                        offer.title,
                        company_names
                            .get(&offer.company_id)
                            .cloned()
                            .unwrap_or_default(),
                    ),
                    None => (String::new(), String::new()),
                };
                PendingAffectation {
                    candidature_id: candidature.id,
                    student_id: candidature.student_id,
                    student_name: user.map(|u| u.name.clone()).unwrap_or_default(),
                    student_email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    offer_id: candidature.offer_id,
                    offer_title,
                    company_name,
                    applied_at: candidature.applied_at,
                }
            })
            .collect())
    }

    async fn company_names(
        &self,
        company_ids: impl Iterator<Item = i32>,
    ) -> Result<HashMap<i32, String>, DbErr> {
        let mut ids: Vec<i32> = company_ids.collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Company::find()
            .filter(entity::company::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|company| (company.id, company.name))
            .collect())
    }
}

fn status_values(statuses: &[CandidatureStatus]) -> Vec<&'static str> {
    statuses.iter().map(|s| s.as_str()).collect()
}

fn status_change(to: CandidatureStatus) -> entity::candidature::ActiveModel {
    entity::candidature::ActiveModel {
        status: ActiveValue::Set(to.as_str().to_string()),
        ..Default::default()
    }
}

fn company_offers(company_id: i32) -> sea_orm::sea_query::SelectStatement {
    Query::select()
        .column(entity::offer::Column::Id)
        .from(entity::prelude::Offer)
        .and_where(entity::offer::Column::CompanyId.eq(company_id))
        .to_owned()
}
