use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create/update payload.
///
/// Every field is optional at the wire level so missing values surface as a validation
/// error naming the required fields rather than a deserialization failure.
#[derive(Deserialize, Serialize, Debug, Default, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferInputDto {
    #[serde(rename = "type")]
    pub offer_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    /// Duration in months.
    pub duration: Option<i32>,
    pub remuneration: Option<f64>,
    /// `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    pub expiration_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    pub id: i32,
    pub company_id: i32,
    #[serde(rename = "type")]
    pub offer_type: String,
    pub title: String,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub duration: i32,
    pub remuneration: f64,
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub validation_status: String,
    pub submitted_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct OfferListDto {
    pub offers: Vec<OfferDto>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct OfferDetailDto {
    pub offer: OfferDto,
}

/// Offer awaiting validation, shown to staff with its company.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingOfferDto {
    #[serde(flatten)]
    pub offer: OfferDto,
    pub company_name: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PendingOfferListDto {
    pub offers: Vec<PendingOfferDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct OfferStatsDto {
    /// VALIDATED offers.
    pub active: u64,
    /// PENDING offers.
    pub pending: u64,
    /// Candidatures that are neither cancelled nor refused.
    pub candidatures: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct OfferStatsResponseDto {
    pub stats: OfferStatsDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdatedDto {
    pub needs_revalidation: bool,
}

/// Staff decision on a pending offer: `VALIDATED` or `REJECTED`.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ReviewOfferDto {
    pub decision: String,
}
