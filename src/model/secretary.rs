use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard counters over the groups the caller acts for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeskStatsDto {
    pub groups: u64,
    pub students: u64,
    /// Attestations waiting for review.
    pub pending_attestations: u64,
    pub validated_attestations: u64,
    /// Students with at least one confirmed placement.
    pub placed_students: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeskStatsResponseDto {
    pub stats: DeskStatsDto,
}

/// Student account created by the acting secretary of `group_id`.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub group_id: i32,
}
