//! Business logic layer.
//!
//! Services own the guards of each operation and the transaction boundaries. Operations
//! that read state and then write open a `DatabaseTransaction` and build their
//! repositories on it; every write is conditional on the state the guards observed, and an
//! early return drops the transaction, rolling it back.

pub mod affectation;
pub mod attestation;
pub mod auth;
pub mod candidature;
pub mod identity;
pub mod leave;
pub mod offer;
pub mod secretary;

#[cfg(test)]
mod test;
