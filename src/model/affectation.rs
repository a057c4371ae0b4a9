use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Retained candidature waiting for a placement decision.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingAffectationDto {
    pub candidature_id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub company_name: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PendingAffectationListDto {
    pub candidatures: Vec<PendingAffectationDto>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AffectationRequestDto {
    pub candidature_id: i32,
}
