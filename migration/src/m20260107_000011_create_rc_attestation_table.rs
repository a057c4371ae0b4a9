use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000006_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RcAttestation::Table)
                    .if_not_exists()
                    .col(integer(RcAttestation::StudentId).primary_key())
                    .col(string(RcAttestation::Status).default("EN_ATTENTE"))
                    .col(string(RcAttestation::FileUrl))
                    .col(
                        timestamp(RcAttestation::DepositedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(RcAttestation::ValidatedAt))
                    .col(timestamp_null(RcAttestation::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rc_attestation_student_id")
                            .from(RcAttestation::Table, RcAttestation::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RcAttestation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RcAttestation {
    Table,
    StudentId,
    Status,
    FileUrl,
    DepositedAt,
    ValidatedAt,
    ExpiresAt,
}
