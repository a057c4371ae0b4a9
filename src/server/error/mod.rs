//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every service and controller. It wraps
//! the concern-specific error enums and implements `IntoResponse`, so handlers can use `?`
//! and still produce the `{ ok: false, error }` body with the right status code.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Domain-specific errors like `AuthError` handle their own response mapping, the request
/// level variants (`Validation`, `NotFound`, `Conflict`) carry a client-facing message, and
/// infrastructure failures collapse into a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected internal failure, see `InternalError`.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Request payload failed validation.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Resource absent or not visible to the caller.
    ///
    /// Results in 404 Not Found. Absent and not-owned are deliberately indistinguishable.
    #[error("{0}")]
    NotFound(String),

    /// Resource is not in a state that allows the requested change.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For every infrastructure error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged; the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        extract::Query,
        http::{StatusCode, Uri},
        response::IntoResponse,
        Json,
    };

    use super::AppError;
    use crate::model::{candidature::CandidatureFilterParam, leave::ToggleLeaveDto};

    async fn error_body(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// Tests that a malformed query string is answered like any other validation error.
    ///
    /// Expected: 400 with a JSON `{ ok: false, error }` body
    #[tokio::test]
    async fn malformed_query_is_json_bad_request() {
        let uri: Uri = "/api/candidatures?offerId=abc".parse().unwrap();
        let rejection = Query::<CandidatureFilterParam>::try_from_uri(&uri).unwrap_err();

        let (status, body) = error_body(AppError::from(rejection)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert!(body["error"].is_string());
    }

    /// Tests that a body that is not JSON is answered as a validation error.
    ///
    /// Expected: 400 with a JSON `{ ok: false, error }` body
    #[tokio::test]
    async fn malformed_json_is_json_bad_request() {
        let rejection = Json::<ToggleLeaveDto>::from_bytes(b"{ enabled: ").unwrap_err();

        let (status, body) = error_body(AppError::from(rejection)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
    }

    /// Tests the status codes of the request level variants.
    ///
    /// Expected: 404 for NotFound, 409 for Conflict, 500 with a generic message otherwise
    #[tokio::test]
    async fn request_errors_keep_their_status() {
        let (status, _) = error_body(AppError::NotFound("Offer not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = error_body(AppError::Conflict("Already placed".to_string())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Already placed");

        let (status, body) =
            error_body(AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
