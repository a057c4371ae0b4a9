use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiOk, ErrorDto, IdDto, MessageDto},
        attestation::SubmitAttestationDto,
        candidature::{ApplyDto, StudentCandidatureListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::candidature::StudentCandidature,
        service::{attestation::AttestationService, candidature::CandidatureService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// The caller's own candidatures.
#[utoipa::path(
    get,
    path = "/api/student/candidatures",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Candidatures of the student", body = ApiOk<StudentCandidatureListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_candidatures(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;
    let student_id = principal.student()?;

    let candidatures = CandidatureService::new(&state.db)
        .list_mine(student_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(StudentCandidatureListDto {
            candidatures: candidatures
                .into_iter()
                .map(StudentCandidature::into_dto)
                .collect(),
        })),
    ))
}

/// Apply to a validated offer.
///
/// # Returns
/// - `201 Created` - Candidature stored as EN_ATTENTE
/// - `404 Not Found` - Offer absent or not validated
/// - `409 Conflict` - Offer expired or already applied to
#[utoipa::path(
    post,
    path = "/api/student/candidatures",
    tag = STUDENT_TAG,
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application submitted", body = ApiOk<IdDto>),
        (status = 400, description = "Malformed request", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer expired or already applied to", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<ApplyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;
    let student_id = principal.student()?;
    let Json(payload) = payload?;

    let id = CandidatureService::new(&state.db)
        .apply(student_id, payload.offer_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiOk::new(IdDto { id }))))
}

/// Withdraw a pending candidature.
#[utoipa::path(
    post,
    path = "/api/student/candidatures/{id}/cancel",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Candidature id")
    ),
    responses(
        (status = 200, description = "Candidature cancelled", body = ApiOk<MessageDto>),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 404, description = "Candidature not found", body = ErrorDto),
        (status = 409, description = "Candidature already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel(
    State(state): State<AppState>,
    session: Session,
    candidature_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;
    let Path(candidature_id) = candidature_id?;
    let student_id = principal.student()?;

    CandidatureService::new(&state.db)
        .cancel(student_id, candidature_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new("Candidature cancelled"))),
    ))
}

/// Deposit or replace the caller's RC attestation.
#[utoipa::path(
    post,
    path = "/api/student/attestation",
    tag = STUDENT_TAG,
    request_body = SubmitAttestationDto,
    responses(
        (status = 200, description = "Attestation deposited", body = ApiOk<MessageDto>),
        (status = 400, description = "Missing file URL", body = ErrorDto),
        (status = 403, description = "Not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_attestation(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SubmitAttestationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Student])
        .await?;
    let student_id = principal.student()?;
    let Json(payload) = payload?;

    AttestationService::new(&state.db)
        .submit(student_id, &payload.file_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new("Attestation deposited"))),
    ))
}
