//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` builder for customization and
//! `create_*` shorthands for the common cases. Profile shorthands (`create_company`,
//! `create_student`, ...) also create the backing user row.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let company = factory::create_company(db).await?;
//! let offer = factory::offer::OfferFactory::new(db, company.id)
//!     .status("VALIDATED")
//!     .build()
//!     .await?;
//!
//! // Whole chain up to a retained candidature
//! let chain = factory::helpers::create_retained_candidature(db).await?;
//! ```

pub mod affectation;
pub mod candidature;
pub mod company;
pub mod helpers;
pub mod offer;
pub mod rc_attestation;
pub mod secretary;
pub mod student;
pub mod student_group;
pub mod teacher;
pub mod user;

pub use affectation::create_affectation;
pub use candidature::create_candidature;
pub use company::create_company;
pub use offer::{create_offer, create_validated_offer};
pub use rc_attestation::create_attestation;
pub use secretary::create_secretary;
pub use student::{create_student, create_student_in_group};
pub use student_group::create_group;
pub use teacher::create_teacher;
pub use user::create_user;
