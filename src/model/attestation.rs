use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// RC attestation waiting for review by the group's acting secretary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttestationDto {
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub group_name: Option<String>,
    pub status: String,
    pub file_url: String,
    pub deposited_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AttestationListDto {
    pub attestations: Vec<AttestationDto>,
}

/// Review decision: `VALIDE` or `REFUSE`.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAttestationDto {
    pub student_id: i32,
    pub decision: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAttestationDto {
    pub file_url: String,
}
