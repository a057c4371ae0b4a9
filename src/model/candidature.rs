use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Deserialize, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CandidatureFilterParam {
    /// Restrict to one offer.
    pub offer_id: Option<i32>,
}

/// Candidature received by a company, with the applicant and the offer title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedCandidatureDto {
    pub id: i32,
    pub offer_id: i32,
    pub offer_title: String,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ReceivedCandidatureListDto {
    pub candidatures: Vec<ReceivedCandidatureDto>,
}

/// Company decision: `RETENU` or `REFUSE`.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionDto {
    pub candidature_id: i32,
    pub decision: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyDto {
    pub offer_id: i32,
}

/// Candidature as seen by the student who made it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentCandidatureDto {
    pub id: i32,
    pub offer_id: i32,
    pub offer_title: String,
    pub company_name: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct StudentCandidatureListDto {
    pub candidatures: Vec<StudentCandidatureDto>,
}
