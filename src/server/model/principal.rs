//! The authenticated caller resolved once per request.

use crate::{model::auth::PrincipalDto, server::error::auth::AuthError};

/// Role-tagged identity of the caller.
///
/// A user may hold several role profiles at once (for example a teacher who is also
/// admin). Each profile id is `Some` when the matching row exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub admin: bool,
    pub company_id: Option<i32>,
    pub student_id: Option<i32>,
    pub teacher_id: Option<i32>,
    pub secretary_id: Option<i32>,
}

impl Principal {
    /// Teachers and admins validate offers and placements.
    pub fn is_staff(&self) -> bool {
        self.admin || self.teacher_id.is_some()
    }

    /// Company profile id, or access denied.
    pub fn company(&self) -> Result<i32, AuthError> {
        self.company_id
            .ok_or_else(|| self.denied("company profile required"))
    }

    /// Student profile id, or access denied.
    pub fn student(&self) -> Result<i32, AuthError> {
        self.student_id
            .ok_or_else(|| self.denied("student profile required"))
    }

    /// Secretary profile id, or access denied. A substitute teacher has none.
    pub fn secretary(&self) -> Result<i32, AuthError> {
        self.secretary_id
            .ok_or_else(|| self.denied("secretary profile required"))
    }

    pub fn denied(&self, reason: &str) -> AuthError {
        AuthError::AccessDenied(self.user_id, reason.to_string())
    }

    pub fn into_dto(self) -> PrincipalDto {
        PrincipalDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            admin: self.admin,
            company_id: self.company_id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            secretary_id: self.secretary_id,
        }
    }
}
