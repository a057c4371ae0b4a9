use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        affectation, attestation, auth, candidature, health, leave, offer, secretary, student,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Placement Desk API"),
    tags(
        (name = "auth", description = "Login, logout and company registration"),
        (name = "offer", description = "Company offers and their validation"),
        (name = "candidature", description = "Candidatures received by companies"),
        (name = "student", description = "Student applications and attestation deposit"),
        (name = "affectation", description = "Placement confirmation by staff"),
        (name = "leave", description = "Secretary leave mode"),
        (name = "attestation", description = "RC attestation review"),
        (name = "secretary", description = "Secretary dashboard and student enrolment"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login))
        .routes(routes!(auth::register_company))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(offer::list_offers, offer::create_offer))
        .routes(routes!(offer::offer_stats))
        .routes(routes!(offer::list_offers_for_review))
        .routes(routes!(
            offer::get_offer,
            offer::update_offer,
            offer::delete_offer
        ))
        .routes(routes!(offer::review_offer))
        .routes(routes!(candidature::list_received))
        .routes(routes!(candidature::decide))
        .routes(routes!(
            student::list_my_candidatures,
            student::apply
        ))
        .routes(routes!(student::cancel))
        .routes(routes!(student::submit_attestation))
        .routes(routes!(affectation::list_pending))
        .routes(routes!(affectation::validate))
        .routes(routes!(affectation::refuse))
        .routes(routes!(leave::leave_status))
        .routes(routes!(leave::toggle_leave))
        .routes(routes!(leave::leave_history))
        .routes(routes!(attestation::list_to_review))
        .routes(routes!(attestation::review))
        .routes(routes!(secretary::desk_stats))
        .routes(routes!(secretary::create_student))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
