use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiOk, ErrorDto, MessageDto},
        candidature::{CandidatureFilterParam, DecisionDto, ReceivedCandidatureListDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::candidature::ReceivedCandidature,
        service::candidature::CandidatureService,
        state::AppState,
    },
};

/// Tag for grouping company-side candidature endpoints in OpenAPI documentation
pub static CANDIDATURE_TAG: &str = "candidature";

/// Candidatures received on the caller's offers, newest first.
///
/// # Access Control
/// - `Company` - Only candidatures on the caller's offers are listed
#[utoipa::path(
    get,
    path = "/api/candidatures",
    tag = CANDIDATURE_TAG,
    params(CandidatureFilterParam),
    responses(
        (status = 200, description = "Received candidatures", body = ApiOk<ReceivedCandidatureListDto>),
        (status = 400, description = "Malformed offerId", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_received(
    State(state): State<AppState>,
    session: Session,
    filter: Result<Query<CandidatureFilterParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let company_id = principal.company()?;
    let Query(filter) = filter?;

    let candidatures = CandidatureService::new(&state.db)
        .list_received(company_id, filter.offer_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(ReceivedCandidatureListDto {
            candidatures: candidatures
                .into_iter()
                .map(ReceivedCandidature::into_dto)
                .collect(),
        })),
    ))
}

/// Retain or refuse a pending candidature.
///
/// # Returns
/// - `200 OK` - Decision recorded
/// - `400 Bad Request` - Decision is neither RETENU nor REFUSE
/// - `404 Not Found` - Candidature absent or on another company's offer
/// - `409 Conflict` - Candidature already decided or cancelled
#[utoipa::path(
    post,
    path = "/api/candidatures/decision",
    tag = CANDIDATURE_TAG,
    request_body = DecisionDto,
    responses(
        (status = 200, description = "Decision recorded", body = ApiOk<MessageDto>),
        (status = 400, description = "Invalid decision", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 404, description = "Candidature not found", body = ErrorDto),
        (status = 409, description = "Candidature already decided", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<DecisionDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let company_id = principal.company()?;
    let Json(payload) = payload?;

    let status = CandidatureService::new(&state.db)
        .decide(company_id, payload.candidature_id, &payload.decision)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new(format!(
            "Candidature {}",
            status.as_str()
        )))),
    ))
}
