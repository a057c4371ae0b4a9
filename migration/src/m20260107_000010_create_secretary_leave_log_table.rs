use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_secretary_table::Secretary;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SecretaryLeaveLog::Table)
                    .if_not_exists()
                    .col(pk_auto(SecretaryLeaveLog::Id))
                    .col(integer(SecretaryLeaveLog::SecretaryId))
                    .col(boolean(SecretaryLeaveLog::OnLeave))
                    .col(
                        timestamp(SecretaryLeaveLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_secretary_leave_log_secretary_id")
                            .from(SecretaryLeaveLog::Table, SecretaryLeaveLog::SecretaryId)
                            .to(Secretary::Table, Secretary::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_secretary_leave_log_secretary_created")
                    .table(SecretaryLeaveLog::Table)
                    .col(SecretaryLeaveLog::SecretaryId)
                    .col(SecretaryLeaveLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SecretaryLeaveLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SecretaryLeaveLog {
    Table,
    Id,
    SecretaryId,
    OnLeave,
    CreatedAt,
}
