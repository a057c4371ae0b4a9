//! Request and response DTOs shared by the HTTP API.
//!
//! Field names are serialized in camelCase. Every response body carries an `ok` flag,
//! either through [`api::ApiOk`] for successes or [`api::ErrorDto`] for failures.

pub mod affectation;
pub mod api;
pub mod attestation;
pub mod auth;
pub mod candidature;
pub mod leave;
pub mod offer;
pub mod secretary;
