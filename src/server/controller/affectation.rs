use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        affectation::{AffectationRequestDto, PendingAffectationListDto},
        api::{ApiOk, ErrorDto, IdDto, MessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::affectation::PendingAffectation,
        service::affectation::AffectationService,
        state::AppState,
    },
};

/// Tag for grouping placement endpoints in OpenAPI documentation
pub static AFFECTATION_TAG: &str = "affectation";

/// Retained candidatures waiting for placement confirmation.
///
/// # Access Control
/// - `Staff` - Teachers and admins
#[utoipa::path(
    get,
    path = "/api/affectations/pending",
    tag = AFFECTATION_TAG,
    responses(
        (status = 200, description = "Retained candidatures without placement", body = ApiOk<PendingAffectationListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pending(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let pending = AffectationService::new(&state.db).list_pending().await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(PendingAffectationListDto {
            candidatures: pending
                .into_iter()
                .map(PendingAffectation::into_dto)
                .collect(),
        })),
    ))
}

/// Confirm a retained candidature as a placement.
///
/// # Returns
/// - `200 OK` - Placement created, body holds its id
/// - `404 Not Found` - No such candidature
/// - `409 Conflict` - Already placed, or not retained
#[utoipa::path(
    post,
    path = "/api/affectations",
    tag = AFFECTATION_TAG,
    request_body = AffectationRequestDto,
    responses(
        (status = 200, description = "Placement created", body = ApiOk<IdDto>),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Candidature not found", body = ErrorDto),
        (status = 409, description = "Already placed or not retained", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AffectationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;
    let Json(payload) = payload?;

    let id = AffectationService::new(&state.db)
        .validate(principal.user_id, payload.candidature_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiOk::new(IdDto { id }))))
}

/// Refuse a retained candidature on pedagogical grounds.
#[utoipa::path(
    post,
    path = "/api/affectations/refuse",
    tag = AFFECTATION_TAG,
    request_body = AffectationRequestDto,
    responses(
        (status = 200, description = "Candidature refused", body = ApiOk<MessageDto>),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Candidature not found", body = ErrorDto),
        (status = 409, description = "Already placed or not retained", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refuse(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<AffectationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;
    let Json(payload) = payload?;

    AffectationService::new(&state.db)
        .refuse(payload.candidature_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new("Candidature refused"))),
    ))
}
