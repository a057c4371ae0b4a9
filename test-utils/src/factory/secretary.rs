//! Secretary profile factory.

use crate::factory::user::create_user;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for secretary profiles attached to an existing user.
pub struct SecretaryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    on_leave: bool,
}

impl<'a> SecretaryFactory<'a> {
    /// Defaults: not on leave.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            on_leave: false,
        }
    }

    pub fn on_leave(mut self, on_leave: bool) -> Self {
        self.on_leave = on_leave;
        self
    }

    pub async fn build(self) -> Result<entity::secretary::Model, DbErr> {
        entity::secretary::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            on_leave: ActiveValue::Set(self.on_leave),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user and a present (not on leave) secretary profile for it.
pub async fn create_secretary(db: &DatabaseConnection) -> Result<entity::secretary::Model, DbErr> {
    let user = create_user(db).await?;
    SecretaryFactory::new(db, user.id).build().await
}
