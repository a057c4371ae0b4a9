use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiOk, ErrorDto, MessageDto},
        auth::{LoginDto, PrincipalResponseDto, RegisterCompanyDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::{AuthService, RegisterCompanyParam},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// On success the user id is stored in the session cookie and the resolved principal is
/// returned. Unknown emails and wrong passwords produce the same response.
///
/// # Returns
/// - `200 OK` - Logged in, body holds the principal
/// - `400 Bad Request` - Malformed body or blank fields
/// - `401 Unauthorized` - Invalid email or password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiOk<PrincipalResponseDto>),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let principal = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_user_id(principal.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(PrincipalResponseDto {
            user: principal.into_dto(),
        })),
    ))
}

/// Create a company account and log into it.
///
/// # Returns
/// - `201 Created` - Account created, session established
/// - `400 Bad Request` - Invalid email, short password or blank names
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register-company",
    tag = AUTH_TAG,
    request_body = RegisterCompanyDto,
    responses(
        (status = 201, description = "Company account created", body = ApiOk<PrincipalResponseDto>),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_company(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<RegisterCompanyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let principal = AuthService::new(&state.db)
        .register_company(RegisterCompanyParam {
            email: payload.email,
            password: payload.password,
            name: payload.name,
            company_name: payload.company_name,
        })
        .await?;

    AuthSession::new(&session)
        .set_user_id(principal.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiOk::new(PrincipalResponseDto {
            user: principal.into_dto(),
        })),
    ))
}

/// Log out by clearing the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = ApiOk<MessageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((StatusCode::OK, Json(ApiOk::new(MessageDto::new("Logged out")))))
}

/// Return the principal of the current session.
///
/// # Returns
/// - `200 OK` - Authenticated, body holds the principal
/// - `401 Unauthorized` - No session or the user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current principal", body = ApiOk<PrincipalResponseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(PrincipalResponseDto {
            user: principal.into_dto(),
        })),
    ))
}
