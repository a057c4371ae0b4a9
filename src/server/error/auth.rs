use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response, the stale session should be discarded by the
    /// client by logging in again.
    #[error("User {0} in session not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password mismatch on login.
    ///
    /// Both cases share one generic message so login does not reveal which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The user lacks the role or authority required for the operation.
    ///
    /// Results in a 403 Forbidden response. The reason is logged but not returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing session user, unknown user or bad credentials
/// - 403 Forbidden - Authenticated user without the required permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto::new("Not authenticated")),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new(self.to_string())),
            )
                .into_response(),
            Self::AccessDenied(_, _) => {
                tracing::warn!("{}", self);
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("Access denied"))).into_response()
            }
        }
    }
}
