use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        affectation::AffectationRepository, candidature::CandidatureRepository,
        offer::OfferRepository,
    },
    error::AppError,
    model::{
        candidature::CandidatureStatus,
        offer::{Offer, OfferFields, OfferStats, OfferStatus, PendingOffer},
    },
};

/// Offer lifecycle: company-side editing and staff-side validation.
pub struct OfferService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new offer for validation.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new PENDING offer
    pub async fn create(&self, company_id: i32, fields: OfferFields) -> Result<i32, AppError> {
        let offer = OfferRepository::new(self.db)
            .create(company_id, fields, Utc::now())
            .await?;

        tracing::info!("Company {} submitted offer {}", company_id, offer.id);

        Ok(offer.id)
    }

    /// Replaces the fields of an owned offer.
    ///
    /// A VALIDATED offer whose type, duration, remuneration or dates change goes back to
    /// PENDING with a fresh submission date.
    ///
    /// # Returns
    /// - `Ok(true)` - Saved, offer sent back to validation
    /// - `Ok(false)` - Saved, status untouched
    /// - `Err(AppError::NotFound)` - Offer absent or owned by another company
    /// - `Err(AppError::Conflict)` - A placement is bound to the offer
    pub async fn update(
        &self,
        company_id: i32,
        offer_id: i32,
        fields: OfferFields,
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let offers = OfferRepository::new(&txn);

        let Some(current) = offers.find_owned(company_id, offer_id).await? else {
            return Err(offer_not_found());
        };
        if AffectationRepository::new(&txn)
            .exists_for_offer(offer_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Offer has a confirmed placement and can no longer be modified".to_string(),
            ));
        }

        let needs_revalidation = Offer::from_entity(current)?.needs_revalidation(&fields);

        let rows = offers
            .update_owned(company_id, offer_id, fields, needs_revalidation, Utc::now())
            .await?;
        if rows == 0 {
            return Err(offer_not_found());
        }

        txn.commit().await?;

        if needs_revalidation {
            tracing::info!("Offer {} returned to validation after edit", offer_id);
        }

        Ok(needs_revalidation)
    }

    /// Deletes an owned offer together with its closed candidatures.
    ///
    /// # Returns
    /// - `Ok(())` - Offer deleted
    /// - `Err(AppError::NotFound)` - Offer absent or owned by another company
    /// - `Err(AppError::Conflict)` - Candidatures still pending or retained, or a placement
    ///   exists
    pub async fn delete(&self, company_id: i32, offer_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let offers = OfferRepository::new(&txn);
        let candidatures = CandidatureRepository::new(&txn);

        if offers.find_owned(company_id, offer_id).await?.is_none() {
            return Err(offer_not_found());
        }
        if candidatures
            .count_for_offer(offer_id, &CandidatureStatus::ACTIVE)
            .await?
            > 0
        {
            return Err(AppError::Conflict(
                "Offer still has pending or retained candidatures".to_string(),
            ));
        }
        if AffectationRepository::new(&txn)
            .exists_for_offer(offer_id)
            .await?
        {
            return Err(AppError::Conflict(
                "Offer has a confirmed placement".to_string(),
            ));
        }

        let removed = candidatures
            .delete_for_offer(offer_id, &CandidatureStatus::CLOSED)
            .await?;
        if offers.delete_owned(company_id, offer_id).await? == 0 {
            return Err(offer_not_found());
        }

        txn.commit().await?;

        tracing::info!(
            "Company {} deleted offer {} ({} closed candidatures removed)",
            company_id,
            offer_id,
            removed
        );

        Ok(())
    }

    pub async fn get(&self, company_id: i32, offer_id: i32) -> Result<Offer, AppError> {
        let Some(offer) = OfferRepository::new(self.db)
            .find_owned(company_id, offer_id)
            .await?
        else {
            return Err(offer_not_found());
        };

        Ok(Offer::from_entity(offer)?)
    }

    /// Offers of the company, most recently submitted first.
    pub async fn list_mine(&self, company_id: i32) -> Result<Vec<Offer>, AppError> {
        OfferRepository::new(self.db)
            .list_by_company(company_id)
            .await?
            .into_iter()
            .map(|offer| Offer::from_entity(offer).map_err(AppError::from))
            .collect()
    }

    /// Dashboard counters: validated offers, pending offers and open candidatures.
    pub async fn stats(&self, company_id: i32) -> Result<OfferStats, AppError> {
        let offers = OfferRepository::new(self.db);

        let active = offers
            .count_by_status(company_id, OfferStatus::Validated)
            .await?;
        let pending = offers
            .count_by_status(company_id, OfferStatus::Pending)
            .await?;
        let candidatures = CandidatureRepository::new(self.db)
            .count_open_for_company(company_id)
            .await?;

        Ok(OfferStats {
            active,
            pending,
            candidatures,
        })
    }

    /// PENDING offers across all companies, oldest submission first.
    pub async fn list_awaiting_validation(&self) -> Result<Vec<PendingOffer>, AppError> {
        OfferRepository::new(self.db)
            .list_pending_with_company()
            .await?
            .into_iter()
            .map(|(offer, company)| -> Result<PendingOffer, AppError> {
                Ok(PendingOffer {
                    offer: Offer::from_entity(offer)?,
                    company_name: company.map(|c| c.name).unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Records a staff decision on a PENDING offer.
    ///
    /// # Arguments
    /// - `decision` - `VALIDATED` or `REJECTED`
    ///
    /// # Returns
    /// - `Ok(OfferStatus)` - The status the offer now has
    /// - `Err(AppError::Validation)` - Unknown decision
    /// - `Err(AppError::NotFound)` - No such offer
    /// - `Err(AppError::Conflict)` - Offer already reviewed
    pub async fn review(&self, offer_id: i32, decision: &str) -> Result<OfferStatus, AppError> {
        let status = OfferStatus::from_review_decision(decision)?;

        let txn = self.db.begin().await?;
        let offers = OfferRepository::new(&txn);

        if offers.find_by_id(offer_id).await?.is_none() {
            return Err(offer_not_found());
        }
        if offers.review(offer_id, status, Utc::now()).await? == 0 {
            return Err(AppError::Conflict(
                "Offer has already been reviewed".to_string(),
            ));
        }

        txn.commit().await?;

        tracing::info!("Offer {} reviewed as {}", offer_id, status.as_str());

        Ok(status)
    }
}

fn offer_not_found() -> AppError {
    AppError::NotFound("Offer not found".to_string())
}
