use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Referent teacher who inherits secretary authority over a group during leave.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubstituteDto {
    pub teacher_user_id: i32,
    pub name: String,
    pub email: String,
    pub group_name: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusDto {
    pub on_leave: bool,
    pub substitutes: Vec<SubstituteDto>,
}

/// Toggle payload.
///
/// `enabled` is kept as a raw JSON value so a missing or non-boolean flag is reported as a
/// validation error.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ToggleLeaveDto {
    #[serde(default)]
    #[schema(value_type = bool)]
    pub enabled: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveToggledDto {
    pub on_leave: bool,
    pub message: String,
    pub substitutes: Vec<SubstituteDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveLogEntryDto {
    pub on_leave: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LeaveHistoryDto {
    pub entries: Vec<LeaveLogEntryDto>,
}
