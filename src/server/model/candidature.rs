//! Candidature state machine and read models.

use chrono::{DateTime, Utc};

use crate::{
    model::candidature::{ReceivedCandidatureDto, StudentCandidatureDto},
    server::error::{internal::InternalError, AppError},
};

/// Status of a student's application.
///
/// EN_ATTENTE moves to RETENU or REFUSE on the company's decision, or to ANNULE when the
/// student withdraws. RETENU may still be refused pedagogically before a placement is
/// confirmed. Every other state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatureStatus {
    EnAttente,
    Retenu,
    Refuse,
    Annule,
}

impl CandidatureStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnAttente => "EN_ATTENTE",
            Self::Retenu => "RETENU",
            Self::Refuse => "REFUSE",
            Self::Annule => "ANNULE",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, InternalError> {
        match value {
            "EN_ATTENTE" => Ok(Self::EnAttente),
            "RETENU" => Ok(Self::Retenu),
            "REFUSE" => Ok(Self::Refuse),
            "ANNULE" => Ok(Self::Annule),
            other => Err(InternalError::UnknownStatus {
                kind: "candidature",
                value: other.to_string(),
            }),
        }
    }

    /// Parses a company decision, which can only be `RETENU` or `REFUSE`.
    pub fn from_company_decision(value: &str) -> Result<Self, AppError> {
        match value {
            "RETENU" => Ok(Self::Retenu),
            "REFUSE" => Ok(Self::Refuse),
            _ => Err(AppError::Validation(
                "Invalid decision, expected RETENU or REFUSE".to_string(),
            )),
        }
    }

    /// Whether a candidature may move from `self` to `to`.
    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::EnAttente, Self::Retenu)
                | (Self::EnAttente, Self::Refuse)
                | (Self::EnAttente, Self::Annule)
                | (Self::Retenu, Self::Refuse)
        )
    }

    /// Statuses that block deleting the offer.
    pub const ACTIVE: [Self; 2] = [Self::EnAttente, Self::Retenu];

    /// Statuses that no longer count as a live application.
    pub const CLOSED: [Self; 2] = [Self::Refuse, Self::Annule];
}

/// Candidature on one of a company's offers.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedCandidature {
    pub id: i32,
    pub offer_id: i32,
    pub offer_title: String,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub status: CandidatureStatus,
    pub applied_at: DateTime<Utc>,
}

impl ReceivedCandidature {
    pub fn into_dto(self) -> ReceivedCandidatureDto {
        ReceivedCandidatureDto {
            id: self.id,
            offer_id: self.offer_id,
            offer_title: self.offer_title,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            status: self.status.as_str().to_string(),
            applied_at: self.applied_at,
        }
    }
}

/// Candidature from the applying student's point of view.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCandidature {
    pub id: i32,
    pub offer_id: i32,
    pub offer_title: String,
    pub company_name: String,
    pub status: CandidatureStatus,
    pub applied_at: DateTime<Utc>,
}

impl StudentCandidature {
    pub fn into_dto(self) -> StudentCandidatureDto {
        StudentCandidatureDto {
            id: self.id,
            offer_id: self.offer_id,
            offer_title: self.offer_title,
            company_name: self.company_name,
            status: self.status.as_str().to_string(),
            applied_at: self.applied_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CandidatureStatus::*;
    use super::*;

    #[test]
    fn pending_candidature_moves_forward_only() {
        assert!(EnAttente.can_transition(Retenu));
        assert!(EnAttente.can_transition(Refuse));
        assert!(EnAttente.can_transition(Annule));
        assert!(!EnAttente.can_transition(EnAttente));
    }

    #[test]
    fn retained_candidature_can_only_be_refused() {
        assert!(Retenu.can_transition(Refuse));
        assert!(!Retenu.can_transition(Annule));
        assert!(!Retenu.can_transition(EnAttente));
    }

    #[test]
    fn terminal_states_do_not_move() {
        for from in [Refuse, Annule] {
            for to in [EnAttente, Retenu, Refuse, Annule] {
                assert!(!from.can_transition(to));
            }
        }
    }

    #[test]
    fn company_decision_rejects_other_values() {
        assert_eq!(CandidatureStatus::from_company_decision("RETENU").unwrap(), Retenu);
        assert!(matches!(
            CandidatureStatus::from_company_decision("ANNULE"),
            Err(AppError::Validation(_))
        ));
    }
}
