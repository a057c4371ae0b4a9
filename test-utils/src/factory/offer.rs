//! Offer factory for creating test offer entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test offers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let offer = OfferFactory::new(&db, company.id)
///     .status("VALIDATED")
///     .remuneration(600.0)
///     .build()
///     .await?;
/// ```
pub struct OfferFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    offer_type: String,
    title: String,
    country: String,
    city: Option<String>,
    duration_months: i32,
    remuneration: f64,
    start_date: NaiveDate,
    expiration_date: NaiveDate,
    status: String,
    submitted_at: chrono::DateTime<Utc>,
}

impl<'a> OfferFactory<'a> {
    /// Creates a new OfferFactory with default values.
    ///
    /// Defaults:
    /// - offer_type: `"STAGE"`
    /// - title: `"Offer {id}"`
    /// - country: `"France"`, city: `Some("Lyon")`
    /// - duration_months: `6`, remuneration: `600.0`
    /// - start_date: 30 days from today, expiration_date: 60 days from today
    /// - status: `"PENDING"`, submitted now
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            company_id,
            offer_type: "STAGE".to_string(),
            title: format!("Offer {}", next_id()),
            country: "France".to_string(),
            city: Some("Lyon".to_string()),
            duration_months: 6,
            remuneration: 600.0,
            start_date: today + Duration::days(30),
            expiration_date: today + Duration::days(60),
            status: "PENDING".to_string(),
            submitted_at: Utc::now(),
        }
    }

    pub fn offer_type(mut self, offer_type: impl Into<String>) -> Self {
        self.offer_type = offer_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn duration_months(mut self, duration_months: i32) -> Self {
        self.duration_months = duration_months;
        self
    }

    pub fn remuneration(mut self, remuneration: f64) -> Self {
        self.remuneration = remuneration;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn expiration_date(mut self, expiration_date: NaiveDate) -> Self {
        self.expiration_date = expiration_date;
        self
    }

    /// Sets the validation status (`PENDING`, `VALIDATED` or `REJECTED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn submitted_at(mut self, submitted_at: chrono::DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    /// Builds and inserts the offer.
    ///
    /// `validated_at` is filled in for `VALIDATED` offers.
    pub async fn build(self) -> Result<entity::offer::Model, DbErr> {
        let validated_at = (self.status == "VALIDATED").then(Utc::now);

        entity::offer::ActiveModel {
            company_id: ActiveValue::Set(self.company_id),
            offer_type: ActiveValue::Set(self.offer_type),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(Some("Test offer description".to_string())),
            skills: ActiveValue::Set(None),
            country: ActiveValue::Set(self.country),
            city: ActiveValue::Set(self.city),
            duration_months: ActiveValue::Set(self.duration_months),
            remuneration: ActiveValue::Set(self.remuneration),
            start_date: ActiveValue::Set(self.start_date),
            expiration_date: ActiveValue::Set(self.expiration_date),
            validation_status: ActiveValue::Set(self.status),
            submitted_at: ActiveValue::Set(self.submitted_at),
            validated_at: ActiveValue::Set(validated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PENDING offer with default values.
pub async fn create_offer(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::offer::Model, DbErr> {
    OfferFactory::new(db, company_id).build().await
}

/// Creates a VALIDATED offer with default values.
pub async fn create_validated_offer(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::offer::Model, DbErr> {
    OfferFactory::new(db, company_id)
        .status("VALIDATED")
        .build()
        .await
}
