//! SeaORM entity definitions for the placement desk schema.
//!
//! Each module mirrors one table created by the `migration` crate. The entity
//! definitions also carry the foreign keys and unique constraints so that test
//! databases built with `Schema::create_table_from_entity` enforce the same
//! relational rules as the migrated schema.

pub mod prelude;

pub mod affectation;
pub mod candidature;
pub mod company;
pub mod offer;
pub mod rc_attestation;
pub mod secretary;
pub mod secretary_leave_log;
pub mod student;
pub mod student_group;
pub mod teacher;
pub mod user;
