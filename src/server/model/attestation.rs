//! RC (civil liability insurance) attestation models.

use chrono::{DateTime, Utc};

use crate::{
    model::attestation::AttestationDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttestationStatus {
    EnAttente,
    Valide,
    Refuse,
}

impl AttestationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnAttente => "EN_ATTENTE",
            Self::Valide => "VALIDE",
            Self::Refuse => "REFUSE",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, InternalError> {
        match value {
            "EN_ATTENTE" => Ok(Self::EnAttente),
            "VALIDE" => Ok(Self::Valide),
            "REFUSE" => Ok(Self::Refuse),
            other => Err(InternalError::UnknownStatus {
                kind: "attestation",
                value: other.to_string(),
            }),
        }
    }

    /// Parses a review decision, which can only be `VALIDE` or `REFUSE`.
    pub fn from_review_decision(value: &str) -> Result<Self, AppError> {
        match value {
            "VALIDE" => Ok(Self::Valide),
            "REFUSE" => Ok(Self::Refuse),
            _ => Err(AppError::Validation(
                "Invalid decision, expected VALIDE or REFUSE".to_string(),
            )),
        }
    }
}

/// Attestation with the student and group it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct AttestationForReview {
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub group_name: Option<String>,
    pub status: AttestationStatus,
    pub file_url: String,
    pub deposited_at: DateTime<Utc>,
}

impl AttestationForReview {
    pub fn into_dto(self) -> AttestationDto {
        AttestationDto {
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            group_name: self.group_name,
            status: self.status.as_str().to_string(),
            file_url: self.file_url,
            deposited_at: self.deposited_at,
        }
    }
}
