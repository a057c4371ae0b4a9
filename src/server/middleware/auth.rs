use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::principal::Principal,
    service::{identity::IdentityService, leave::LeaveService},
};

/// Role requirement checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Caller owns a company profile.
    Company,
    /// Caller owns a student profile.
    Student,
    /// Teacher or admin, the authorities that validate offers and placements.
    Staff,
    /// Caller owns a secretary profile. A teacher substituting for a secretary does not.
    Secretary,
    /// Caller currently holds secretary authority over at least one group, directly or by
    /// delegation. Admins always pass.
    ActingSecretary,
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Authenticated and all permissions satisfied
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<Principal, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(principal) = IdentityService::new(self.db)
            .find_principal(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Company => {
                    principal.company()?;
                }
                Permission::Student => {
                    principal.student()?;
                }
                Permission::Staff => {
                    if !principal.is_staff() {
                        return Err(principal.denied("teacher or admin role required").into());
                    }
                }
                Permission::Secretary => {
                    principal.secretary()?;
                }
                Permission::ActingSecretary => {
                    if !principal.admin
                        && LeaveService::new(self.db)
                            .acting_group_ids(&principal)
                            .await?
                            .is_empty()
                    {
                        return Err(principal
                            .denied("no group under the caller's secretary authority")
                            .into());
                    }
                }
                Permission::Admin => {
                    if !principal.admin {
                        return Err(principal.denied("admin role required").into());
                    }
                }
            }
        }

        Ok(principal)
    }
}
