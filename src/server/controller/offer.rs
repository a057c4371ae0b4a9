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
        offer::{
            OfferDetailDto, OfferInputDto, OfferListDto, OfferStatsResponseDto, OfferUpdatedDto,
            PendingOfferListDto, ReviewOfferDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::offer::{Offer, OfferFields, PendingOffer},
        service::offer::OfferService,
        state::AppState,
    },
};

/// Tag for grouping offer endpoints in OpenAPI documentation
pub static OFFER_TAG: &str = "offer";

/// List the caller's offers.
///
/// # Access Control
/// - `Company` - Only the offers of the caller's company are listed
///
/// # Returns
/// - `200 OK` - Offers, most recently submitted first
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller has no company profile
#[utoipa::path(
    get,
    path = "/api/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Offers of the company", body = ApiOk<OfferListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_offers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let company_id = principal.company()?;

    let offers = OfferService::new(&state.db).list_mine(company_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(OfferListDto {
            offers: offers.into_iter().map(Offer::into_dto).collect(),
        })),
    ))
}

/// Submit a new offer for validation.
///
/// # Access Control
/// - `Company` - The offer is owned by the caller's company
///
/// # Returns
/// - `201 Created` - Offer stored as PENDING
/// - `400 Bad Request` - Missing or inconsistent fields
/// - `403 Forbidden` - Caller has no company profile
#[utoipa::path(
    post,
    path = "/api/offers",
    tag = OFFER_TAG,
    request_body = OfferInputDto,
    responses(
        (status = 201, description = "Offer submitted", body = ApiOk<IdDto>),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<OfferInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let company_id = principal.company()?;
    let Json(payload) = payload?;

    let fields = OfferFields::from_dto(payload)?;
    let id = OfferService::new(&state.db)
        .create(company_id, fields)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiOk::new(IdDto { id }))))
}

/// Dashboard counters of the caller's company.
#[utoipa::path(
    get,
    path = "/api/offers/stats",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Validated offers, pending offers and open candidatures", body = ApiOk<OfferStatsResponseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn offer_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let company_id = principal.company()?;

    let stats = OfferService::new(&state.db).stats(company_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(OfferStatsResponseDto {
            stats: stats.into_dto(),
        })),
    ))
}

/// Get one of the caller's offers.
///
/// # Returns
/// - `200 OK` - The offer
/// - `404 Not Found` - No such offer, or owned by another company
#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "The offer", body = ApiOk<OfferDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offer(
    State(state): State<AppState>,
    session: Session,
    offer_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let Path(offer_id) = offer_id?;
    let company_id = principal.company()?;

    let offer = OfferService::new(&state.db)
        .get(company_id, offer_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(OfferDetailDto {
            offer: offer.into_dto(),
        })),
    ))
}

/// Replace the fields of one of the caller's offers.
///
/// Changing the type, duration, remuneration or dates of a validated offer sends it back
/// to validation, reported as `needsRevalidation`.
///
/// # Returns
/// - `200 OK` - Offer saved
/// - `400 Bad Request` - Missing or inconsistent fields
/// - `404 Not Found` - No such offer, or owned by another company
/// - `409 Conflict` - A placement is bound to the offer
#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    request_body = OfferInputDto,
    responses(
        (status = 200, description = "Offer updated", body = ApiOk<OfferUpdatedDto>),
        (status = 400, description = "Invalid offer data", body = ErrorDto),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer has a confirmed placement", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_offer(
    State(state): State<AppState>,
    session: Session,
    offer_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<OfferInputDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let Path(offer_id) = offer_id?;
    let company_id = principal.company()?;
    let Json(payload) = payload?;

    let fields = OfferFields::from_dto(payload)?;
    let needs_revalidation = OfferService::new(&state.db)
        .update(company_id, offer_id, fields)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(OfferUpdatedDto { needs_revalidation })),
    ))
}

/// Delete one of the caller's offers.
///
/// Refused while candidatures are pending or retained, or once a placement exists.
/// Cancelled and refused candidatures are deleted with the offer.
#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    tag = OFFER_TAG,
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "Offer deleted", body = ApiOk<MessageDto>),
        (status = 403, description = "Not a company", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Active candidatures or a placement exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    session: Session,
    offer_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Company])
        .await?;
    let Path(offer_id) = offer_id?;
    let company_id = principal.company()?;

    OfferService::new(&state.db)
        .delete(company_id, offer_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new("Offer deleted"))),
    ))
}

/// Offers awaiting validation, oldest submission first.
///
/// # Access Control
/// - `Staff` - Teachers and admins
#[utoipa::path(
    get,
    path = "/api/offers/review",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "Pending offers with their company", body = ApiOk<PendingOfferListDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_offers_for_review(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let offers = OfferService::new(&state.db)
        .list_awaiting_validation()
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(PendingOfferListDto {
            offers: offers.into_iter().map(PendingOffer::into_dto).collect(),
        })),
    ))
}

/// Validate or reject a pending offer.
///
/// # Access Control
/// - `Staff` - Teachers and admins
///
/// # Returns
/// - `200 OK` - Decision recorded
/// - `400 Bad Request` - Decision is neither VALIDATED nor REJECTED
/// - `404 Not Found` - No such offer
/// - `409 Conflict` - Offer already reviewed
#[utoipa::path(
    post,
    path = "/api/offers/{id}/review",
    tag = OFFER_TAG,
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    request_body = ReviewOfferDto,
    responses(
        (status = 200, description = "Decision recorded", body = ApiOk<MessageDto>),
        (status = 400, description = "Invalid decision", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer already reviewed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_offer(
    State(state): State<AppState>,
    session: Session,
    offer_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReviewOfferDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;
    let Path(offer_id) = offer_id?;
    let Json(payload) = payload?;

    let status = OfferService::new(&state.db)
        .review(offer_id, &payload.decision)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiOk::new(MessageDto::new(format!(
            "Offer {}",
            status.as_str()
        )))),
    ))
}
