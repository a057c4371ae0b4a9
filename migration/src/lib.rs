pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_company_table;
mod m20260105_000003_create_teacher_table;
mod m20260105_000004_create_secretary_table;
mod m20260105_000005_create_student_group_table;
mod m20260105_000006_create_student_table;
mod m20260106_000007_create_offer_table;
mod m20260106_000008_create_candidature_table;
mod m20260106_000009_create_affectation_table;
mod m20260107_000010_create_secretary_leave_log_table;
mod m20260107_000011_create_rc_attestation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_company_table::Migration),
            Box::new(m20260105_000003_create_teacher_table::Migration),
            Box::new(m20260105_000004_create_secretary_table::Migration),
            Box::new(m20260105_000005_create_student_group_table::Migration),
            Box::new(m20260105_000006_create_student_table::Migration),
            Box::new(m20260106_000007_create_offer_table::Migration),
            Box::new(m20260106_000008_create_candidature_table::Migration),
            Box::new(m20260106_000009_create_affectation_table::Migration),
            Box::new(m20260107_000010_create_secretary_leave_log_table::Migration),
            Box::new(m20260107_000011_create_rc_attestation_table::Migration),
        ]
    }
}
