//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO into domain
//! parameters, calls one service operation and wraps the result in `ApiOk`. Errors bubble
//! up as `AppError` and are rendered by its `IntoResponse` implementation.

pub mod affectation;
pub mod attestation;
pub mod auth;
pub mod candidature;
pub mod health;
pub mod leave;
pub mod offer;
pub mod secretary;
pub mod student;
