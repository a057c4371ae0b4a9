use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Secretary::Table)
                    .if_not_exists()
                    .col(pk_auto(Secretary::Id))
                    .col(integer_uniq(Secretary::UserId))
                    .col(boolean(Secretary::OnLeave).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_secretary_user_id")
                            .from(Secretary::Table, Secretary::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Secretary::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Secretary {
    Table,
    Id,
    UserId,
    OnLeave,
}
