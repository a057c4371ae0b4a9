use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiOk, ErrorDto, IdDto},
        secretary::{CreateStudentDto, DeskStatsResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::secretary::CreateStudentParam,
        service::secretary::SecretaryService,
        state::AppState,
    },
};

/// Tag for grouping secretary desk endpoints in OpenAPI documentation
pub static SECRETARY_TAG: &str = "secretary";

/// Dashboard counters over the groups the caller currently acts for.
///
/// # Access Control
/// - `ActingSecretary` - A present secretary, a referent teacher whose secretary is on
///   leave, or an admin (who counts every group)
#[utoipa::path(
    get,
    path = "/api/secretary/stats",
    tag = SECRETARY_TAG,
    responses(
        (status = 200, description = "Groups, students, attestations and placements", body = ApiOk<DeskStatsResponseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No secretary authority", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn desk_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActingSecretary])
        .await?;

    let stats = SecretaryService::new(&state.db).stats(&principal).await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(DeskStatsResponseDto {
            stats: stats.into_dto(),
        })),
    ))
}

/// Create a student account in one of the caller's groups.
///
/// # Returns
/// - `201 Created` - Id of the new student profile
/// - `400 Bad Request` - Malformed email, short password or blank name
/// - `403 Forbidden` - Caller does not act for the group
/// - `404 Not Found` - No such group
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/secretary/students",
    tag = SECRETARY_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = ApiOk<IdDto>),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No authority over the group", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateStudentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActingSecretary])
        .await?;
    let Json(payload) = payload?;

    let id = SecretaryService::new(&state.db)
        .create_student(&principal, CreateStudentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiOk::new(IdDto { id }))))
}
