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
        attestation::{AttestationListDto, ReviewAttestationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::attestation::AttestationForReview,
        service::attestation::AttestationService,
        state::AppState,
    },
};

/// Tag for grouping attestation review endpoints in OpenAPI documentation
pub static ATTESTATION_TAG: &str = "attestation";

/// Attestations awaiting review in the groups the caller currently acts for.
///
/// # Access Control
/// - `ActingSecretary` - A present secretary, a referent teacher whose secretary is on
///   leave, or an admin (who sees every group)
#[utoipa::path(
    get,
    path = "/api/secretary/attestations",
    tag = ATTESTATION_TAG,
    responses(
        (status = 200, description = "Attestations to review", body = ApiOk<AttestationListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "No secretary authority", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_to_review(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActingSecretary])
        .await?;

    let attestations = AttestationService::new(&state.db)
        .list_to_review(&principal)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(AttestationListDto {
            attestations: attestations
                .into_iter()
                .map(AttestationForReview::into_dto)
                .collect(),
        })),
    ))
}

/// Validate or refuse a student's attestation.
///
/// # Returns
/// - `200 OK` - Decision recorded
/// - `400 Bad Request` - Decision is neither VALIDE nor REFUSE
/// - `403 Forbidden` - Caller does not act for the student's group
/// - `404 Not Found` - Student has no attestation
/// - `409 Conflict` - Attestation already reviewed
#[utoipa::path(
    post,
    path = "/api/secretary/attestations/review",
    tag = ATTESTATION_TAG,
    request_body = ReviewAttestationDto,
    responses(
        (status = 200, description = "Decision recorded", body = ApiOk<MessageDto>),
        (status = 400, description = "Invalid decision", body = ErrorDto),
        (status = 403, description = "No authority over the student's group", body = ErrorDto),
        (status = 404, description = "Attestation not found", body = ErrorDto),
        (status = 409, description = "Attestation already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ReviewAttestationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ActingSecretary])
        .await?;
    let Json(payload) = payload?;

    let status = AttestationService::new(&state.db)
        .review(&principal, payload.student_id, &payload.decision)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new(format!(
            "Attestation {}",
            status.as_str()
        )))),
    ))
}
