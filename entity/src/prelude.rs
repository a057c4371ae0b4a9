pub use super::affectation::Entity as Affectation;
pub use super::candidature::Entity as Candidature;
pub use super::company::Entity as Company;
pub use super::offer::Entity as Offer;
pub use super::rc_attestation::Entity as RcAttestation;
pub use super::secretary::Entity as Secretary;
pub use super::secretary_leave_log::Entity as SecretaryLeaveLog;
pub use super::student::Entity as Student;
pub use super::student_group::Entity as StudentGroup;
pub use super::teacher::Entity as Teacher;
pub use super::user::Entity as User;
