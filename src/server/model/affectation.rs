//! Placement read models.

use chrono::{DateTime, Utc};

use crate::model::affectation::PendingAffectationDto;

/// Retained candidature waiting for a placement decision by staff.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAffectation {
    pub candidature_id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub student_email: String,
    pub offer_id: i32,
    pub offer_title: String,
    pub company_name: String,
    pub applied_at: DateTime<Utc>,
}

impl PendingAffectation {
    pub fn into_dto(self) -> PendingAffectationDto {
        PendingAffectationDto {
            candidature_id: self.candidature_id,
            student_id: self.student_id,
            student_name: self.student_name,
            student_email: self.student_email,
            offer_id: self.offer_id,
            offer_title: self.offer_title,
            company_name: self.company_name,
            applied_at: self.applied_at,
        }
    }
}
