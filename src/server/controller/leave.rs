use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiOk, ErrorDto},
        leave::{LeaveHistoryDto, LeaveStatusDto, LeaveToggledDto, ToggleLeaveDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::leave::{requested_leave_flag, LeaveLogEntry},
        service::leave::LeaveService,
        state::AppState,
    },
};

/// Tag for grouping secretary leave endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leave";

/// Current leave flag and the referent teachers who substitute for the secretary.
///
/// # Access Control
/// - `Secretary` - Strict secretary profile; a substituting teacher is rejected
#[utoipa::path(
    get,
    path = "/api/secretary/leave/status",
    tag = LEAVE_TAG,
    responses(
        (status = 200, description = "Leave flag and substitutes", body = ApiOk<LeaveStatusDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a secretary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Secretary])
        .await?;
    let secretary_id = principal.secretary()?;

    let status = LeaveService::new(&state.db).status(secretary_id).await?;

    Ok((StatusCode::OK, Json(ApiOk::new(status.into_dto()))))
}

/// Enable or disable leave mode.
///
/// `enabled` must be a JSON boolean; strings and numbers are rejected.
///
/// # Returns
/// - `200 OK` - New flag, confirmation message and substitutes
/// - `400 Bad Request` - `enabled` missing or not a boolean
/// - `403 Forbidden` - Not a secretary
#[utoipa::path(
    post,
    path = "/api/secretary/leave/toggle",
    tag = LEAVE_TAG,
    request_body = ToggleLeaveDto,
    responses(
        (status = 200, description = "Leave mode updated", body = ApiOk<LeaveToggledDto>),
        (status = 400, description = "enabled is not a boolean", body = ErrorDto),
        (status = 403, description = "Not a secretary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_leave(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ToggleLeaveDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Secretary])
        .await?;
    let secretary_id = principal.secretary()?;
    let Json(payload) = payload?;

    let enabled = requested_leave_flag(&payload)?;

    let status = LeaveService::new(&state.db)
        .toggle(secretary_id, enabled)
        .await?;

    Ok((StatusCode::OK, Json(ApiOk::new(status.into_toggled_dto()))))
}

/// Leave log of the caller, newest first.
#[utoipa::path(
    get,
    path = "/api/secretary/leave/history",
    tag = LEAVE_TAG,
    responses(
        (status = 200, description = "Leave log", body = ApiOk<LeaveHistoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a secretary", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_history(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Secretary])
        .await?;
    let secretary_id = principal.secretary()?;

    let entries = LeaveService::new(&state.db).history(secretary_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(LeaveHistoryDto {
            entries: entries.into_iter().map(LeaveLogEntry::into_dto).collect(),
        })),
    ))
}
