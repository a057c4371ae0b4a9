use sea_orm::DatabaseConnection;

use crate::server::{
    data::{profile::ProfileRepository, user::UserRepository},
    error::AppError,
    model::principal::Principal,
};

/// Maps a user to the role profiles they hold.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the principal for a known user row.
    pub async fn resolve(&self, user: entity::user::Model) -> Result<Principal, AppError> {
        let profiles = ProfileRepository::new(self.db);

        let company = profiles.company_for_user(user.id).await?;
        let student = profiles.student_for_user(user.id).await?;
        let teacher = profiles.teacher_for_user(user.id).await?;
        let secretary = profiles.secretary_for_user(user.id).await?;

        Ok(Principal {
            user_id: user.id,
            name: user.name,
            email: user.email,
            admin: user.admin,
            company_id: company.map(|c| c.id),
            student_id: student.map(|s| s.id),
            teacher_id: teacher.map(|t| t.id),
            secretary_id: secretary.map(|s| s.id),
        })
    }

    /// Builds the principal for a user id.
    ///
    /// # Returns
    /// - `Ok(Some(Principal))` - User exists
    /// - `Ok(None)` - No user with that id
    pub async fn find_principal(&self, user_id: i32) -> Result<Option<Principal>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        Ok(Some(self.resolve(user).await?))
    }
}
