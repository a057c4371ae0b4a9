//! Company profile factory.

use crate::factory::{helpers::next_id, user::create_user};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for company profiles attached to an existing user.
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
}

impl<'a> CompanyFactory<'a> {
    /// Defaults: name `"Company {id}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Company {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user and a company profile for it.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    let user = create_user(db).await?;
    CompanyFactory::new(db, user.id).build().await
}
