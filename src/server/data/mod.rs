//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one concern each. They are generic over
//! `ConnectionTrait`, so services can run the same repository against the pool or inside a
//! `DatabaseTransaction` when several reads and writes must commit together. Conditional
//! writes return the number of affected rows and leave the interpretation of zero to the
//! calling service.

pub mod affectation;
pub mod attestation;
pub mod candidature;
pub mod group;
pub mod leave;
pub mod offer;
pub mod profile;
pub mod user;

#[cfg(test)]
mod test;
