//! Offer domain models, validation status and the revalidation rule.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::offer::{OfferDto, OfferInputDto, OfferStatsDto, PendingOfferDto},
    server::error::{internal::InternalError, AppError},
};

/// Validation status of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferStatus {
    Pending,
    Validated,
    Rejected,
}

impl OfferStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Validated => "VALIDATED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Reads a stored status; unknown values indicate corrupt data.
    pub fn from_db(value: &str) -> Result<Self, InternalError> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "VALIDATED" => Ok(Self::Validated),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(InternalError::UnknownStatus {
                kind: "offer",
                value: other.to_string(),
            }),
        }
    }

    /// Parses a staff review decision, which can only be `VALIDATED` or `REJECTED`.
    pub fn from_review_decision(value: &str) -> Result<Self, AppError> {
        match value {
            "VALIDATED" => Ok(Self::Validated),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(
                "Invalid decision, expected VALIDATED or REJECTED".to_string(),
            )),
        }
    }
}

/// Internship or job offer posted by a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i32,
    pub company_id: i32,
    pub offer_type: String,
    pub title: String,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub duration_months: i32,
    pub remuneration: f64,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: OfferStatus,
    pub submitted_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl Offer {
    /// Converts an entity model to an offer domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Offer)` - The converted domain model
    /// - `Err(InternalError::UnknownStatus)` - Stored validation status is not recognized
    pub fn from_entity(entity: entity::offer::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            company_id: entity.company_id,
            offer_type: entity.offer_type,
            title: entity.title,
            description: entity.description,
            skills: entity.skills,
            country: entity.country,
            city: entity.city,
            duration_months: entity.duration_months,
            remuneration: entity.remuneration,
            start_date: entity.start_date,
            expiration_date: entity.expiration_date,
            status: OfferStatus::from_db(&entity.validation_status)?,
            submitted_at: entity.submitted_at,
            validated_at: entity.validated_at,
        })
    }

    /// Whether applying `fields` to this offer sends it back to validation.
    ///
    /// Only a VALIDATED offer is affected, and only when its type, duration,
    /// remuneration, start date or expiration date changes. Title, description, skills
    /// and location edits keep the current status.
    pub fn needs_revalidation(&self, fields: &OfferFields) -> bool {
        self.status == OfferStatus::Validated
            && (self.offer_type != fields.offer_type
                || self.duration_months != fields.duration_months
                || self.remuneration != fields.remuneration
                || self.start_date != fields.start_date
                || self.expiration_date != fields.expiration_date)
    }

    pub fn into_dto(self) -> OfferDto {
        OfferDto {
            id: self.id,
            company_id: self.company_id,
            offer_type: self.offer_type,
            title: self.title,
            description: self.description,
            skills: self.skills,
            country: self.country,
            city: self.city,
            duration: self.duration_months,
            remuneration: self.remuneration,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
            validation_status: self.status.as_str().to_string(),
            submitted_at: self.submitted_at,
            validated_at: self.validated_at,
        }
    }
}

/// Validated offer fields, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferFields {
    pub offer_type: String,
    pub title: String,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub duration_months: i32,
    pub remuneration: f64,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

impl OfferFields {
    /// Validates a create/update payload.
    ///
    /// # Returns
    /// - `Ok(OfferFields)` - All required fields present and consistent
    /// - `Err(AppError::Validation)` - Required fields missing or blank (all of them are
    ///   named), a malformed date, a duration below one month, a negative remuneration, or
    ///   an expiration date before the start date
    pub fn from_dto(dto: OfferInputDto) -> Result<Self, AppError> {
        let offer_type = non_blank(dto.offer_type);
        let title = non_blank(dto.title);
        let country = non_blank(dto.country);
        let start_date = non_blank(dto.start_date);
        let expiration_date = non_blank(dto.expiration_date);

        let mut missing = Vec::new();
        if offer_type.is_none() {
            missing.push("type");
        }
        if title.is_none() {
            missing.push("title");
        }
        if country.is_none() {
            missing.push("country");
        }
        if dto.duration.is_none() {
            missing.push("duration");
        }
        if dto.remuneration.is_none() {
            missing.push("remuneration");
        }
        if start_date.is_none() {
            missing.push("startDate");
        }
        if expiration_date.is_none() {
            missing.push("expirationDate");
        }

        let (
            Some(offer_type),
            Some(title),
            Some(country),
            Some(duration_months),
            Some(remuneration),
            Some(start_date),
            Some(expiration_date),
        ) = (
            offer_type,
            title,
            country,
            dto.duration,
            dto.remuneration,
            start_date,
            expiration_date,
        )
        else {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        };

        let start_date = parse_date("startDate", &start_date)?;
        let expiration_date = parse_date("expirationDate", &expiration_date)?;

        if duration_months < 1 {
            return Err(AppError::Validation(
                "duration must be at least 1 month".to_string(),
            ));
        }
        if !remuneration.is_finite() || remuneration < 0.0 {
            return Err(AppError::Validation(
                "remuneration must be a positive amount".to_string(),
            ));
        }
        if expiration_date < start_date {
            return Err(AppError::Validation(
                "expirationDate cannot be before startDate".to_string(),
            ));
        }

        Ok(Self {
            offer_type,
            title,
            description: non_blank(dto.description),
            skills: non_blank(dto.skills),
            country,
            city: non_blank(dto.city),
            duration_months,
            remuneration,
            start_date,
            expiration_date,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{field} must be a date formatted YYYY-MM-DD")))
}

/// Pending offer with the name of the company that posted it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOffer {
    pub offer: Offer,
    pub company_name: String,
}

impl PendingOffer {
    pub fn into_dto(self) -> PendingOfferDto {
        PendingOfferDto {
            offer: self.offer.into_dto(),
            company_name: self.company_name,
        }
    }
}

/// Dashboard counters for one company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferStats {
    pub active: u64,
    pub pending: u64,
    pub candidatures: u64,
}

impl OfferStats {
    pub fn into_dto(self) -> OfferStatsDto {
        OfferStatsDto {
            active: self.active,
            pending: self.pending,
            candidatures: self.candidatures,
        }
    }
}
