use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260106_000008_create_candidature_table::Candidature,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Affectation::Table)
                    .if_not_exists()
                    .col(pk_auto(Affectation::Id))
                    // At most one placement per candidature.
                    .col(integer_uniq(Affectation::CandidatureId))
                    .col(integer(Affectation::ValidatedBy))
                    .col(
                        timestamp(Affectation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_affectation_candidature_id")
                            .from(Affectation::Table, Affectation::CandidatureId)
                            .to(Candidature::Table, Candidature::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_affectation_validated_by")
                            .from(Affectation::Table, Affectation::ValidatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Affectation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Affectation {
    Table,
    Id,
    CandidatureId,
    ValidatedBy,
    CreatedAt,
}
