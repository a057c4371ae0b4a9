//! Secretary leave (delegation) models.

use chrono::{DateTime, Utc};

use crate::{
    model::leave::{
        LeaveLogEntryDto, LeaveStatusDto, LeaveToggledDto, SubstituteDto, ToggleLeaveDto,
    },
    server::error::AppError,
};

/// Reads the requested leave flag from a toggle payload.
///
/// # Returns
/// - `Ok(bool)` - `enabled` is a JSON boolean
/// - `Err(AppError::Validation)` - `enabled` is missing, null, a string or a number
pub fn requested_leave_flag(payload: &ToggleLeaveDto) -> Result<bool, AppError> {
    payload
        .enabled
        .as_bool()
        .ok_or_else(|| AppError::Validation("enabled must be a boolean".to_string()))
}

/// Referent teacher of one of the secretary's groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitute {
    pub teacher_user_id: i32,
    pub name: String,
    pub email: String,
    pub group_name: String,
}

impl Substitute {
    pub fn into_dto(self) -> SubstituteDto {
        SubstituteDto {
            teacher_user_id: self.teacher_user_id,
            name: self.name,
            email: self.email,
            group_name: self.group_name,
        }
    }
}

/// Current leave flag and the teachers who act in the secretary's place while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveStatus {
    pub on_leave: bool,
    pub substitutes: Vec<Substitute>,
}

impl LeaveStatus {
    /// Message shown after a toggle.
    pub fn toggle_message(&self) -> &'static str {
        if self.on_leave {
            "Leave mode enabled. The referent teachers of your groups can act on your behalf."
        } else {
            "Leave mode disabled."
        }
    }

    pub fn into_dto(self) -> LeaveStatusDto {
        LeaveStatusDto {
            on_leave: self.on_leave,
            substitutes: self.substitutes.into_iter().map(Substitute::into_dto).collect(),
        }
    }

    pub fn into_toggled_dto(self) -> LeaveToggledDto {
        LeaveToggledDto {
            on_leave: self.on_leave,
            message: self.toggle_message().to_string(),
            substitutes: self.substitutes.into_iter().map(Substitute::into_dto).collect(),
        }
    }
}

/// One row of the append-only leave log.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveLogEntry {
    pub on_leave: bool,
    pub created_at: DateTime<Utc>,
}

impl LeaveLogEntry {
    pub fn from_entity(entity: entity::secretary_leave_log::Model) -> Self {
        Self {
            on_leave: entity.on_leave,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LeaveLogEntryDto {
        LeaveLogEntryDto {
            on_leave: self.on_leave,
            created_at: self.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn toggle(body: serde_json::Value) -> ToggleLeaveDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn boolean_flag_is_accepted() {
        assert!(requested_leave_flag(&toggle(json!({ "enabled": true }))).unwrap());
        assert!(!requested_leave_flag(&toggle(json!({ "enabled": false }))).unwrap());
    }

    #[test]
    fn string_and_number_flags_are_rejected() {
        for enabled in [json!("true"), json!("false"), json!(1), json!(0)] {
            assert!(matches!(
                requested_leave_flag(&toggle(json!({ "enabled": enabled }))),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn missing_or_null_flag_is_rejected() {
        assert!(matches!(
            requested_leave_flag(&toggle(json!({}))),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            requested_leave_flag(&toggle(json!({ "enabled": null }))),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn toggle_message_follows_flag() {
        let status = LeaveStatus {
            on_leave: true,
            substitutes: Vec::new(),
        };
        assert!(status.toggle_message().starts_with("Leave mode enabled"));

        let status = LeaveStatus {
            on_leave: false,
            substitutes: Vec::new(),
        };
        assert_eq!(status.toggle_message(), "Leave mode disabled.");
    }
}
