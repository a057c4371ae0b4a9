use crate::server::{
    error::{auth::AuthError, AppError},
    model::principal::Principal,
    service::identity::IdentityService,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod attestation;
mod auth;

/// Resolves the principal of an existing user.
async fn principal_of(db: &DatabaseConnection, user_id: i32) -> Result<Principal, AppError> {
    Ok(IdentityService::new(db)
        .find_principal(user_id)
        .await?
        .unwrap())
}
