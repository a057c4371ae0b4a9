use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::principal::Principal,
    service::identity::IdentityService,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Email/password authentication and company self-registration.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

/// Validated company signup.
pub struct RegisterCompanyParam {
    pub email: String,
    pub password: String,
    pub name: String,
    pub company_name: String,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and resolves the caller.
    ///
    /// Unknown email and wrong password both yield `AuthError::InvalidCredentials`.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Credentials match
    /// - `Err(AppError::Validation)` - Email or password blank
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    /// - `Err(AppError::InternalErr(PasswordVerification))` - Stored hash unreadable
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = bcrypt::verify(password, &user.password_hash).map_err(|source| {
            InternalError::PasswordVerification {
                user_id: user.id,
                source,
            }
        })?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", user.id);

        IdentityService::new(self.db).resolve(user).await
    }

    /// Creates a user with a company profile.
    ///
    /// # Returns
    /// - `Ok(Principal)` - The new company account
    /// - `Err(AppError::Validation)` - Malformed email, short password or blank names
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register_company(
        &self,
        param: RegisterCompanyParam,
    ) -> Result<Principal, AppError> {
        let company_name = param.company_name.trim().to_string();
        if company_name.is_empty() {
            return Err(AppError::Validation("companyName is required".to_string()));
        }
        let account = NewAccount::prepare(&param.email, &param.password, &param.name)?;

        let txn = self.db.begin().await?;
        let user = account.insert(&txn).await?;

        let company = entity::company::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            name: ActiveValue::Set(company_name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!("Registered company {} for user {}", company.id, user.id);

        IdentityService::new(self.db).resolve(user).await
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checked credentials of an account about to be created, password already hashed.
pub(super) struct NewAccount {
    email: String,
    name: String,
    password_hash: String,
}

impl NewAccount {
    /// Normalizes the email, checks the password length and the name, then hashes.
    ///
    /// # Returns
    /// - `Err(AppError::Validation)` - Malformed email, short password or blank name
    /// - `Err(AppError::InternalErr(PasswordHash))` - bcrypt failure
    pub(super) fn prepare(email: &str, password: &str, name: &str) -> Result<Self, AppError> {
        let email = normalize_email(email);
        let name = name.trim().to_string();

        if !email.contains('@') {
            return Err(AppError::Validation("A valid email is required".to_string()));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalErr(InternalError::PasswordHash(e)))?;

        Ok(Self {
            email,
            name,
            password_hash,
        })
    }

    /// Inserts the user row; a registered email is a conflict.
    pub(super) async fn insert<C: ConnectionTrait>(
        self,
        db: &C,
    ) -> Result<entity::user::Model, AppError> {
        if UserRepository::new(db).find_by_email(&self.email).await?.is_some() {
            return Err(email_taken());
        }

        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(self.password_hash),
            admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(),
            _ => AppError::DbErr(err),
        })
    }
}

fn email_taken() -> AppError {
    AppError::Conflict("Email already registered".to_string())
}
