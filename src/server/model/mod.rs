//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these types at the data layer boundary, services
//! operate on them, and controllers turn them into DTOs with `into_dto()`.

pub mod affectation;
pub mod attestation;
pub mod candidature;
pub mod leave;
pub mod offer;
pub mod principal;
pub mod secretary;
