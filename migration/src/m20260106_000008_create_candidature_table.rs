use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000006_create_student_table::Student, m20260106_000007_create_offer_table::Offer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidature::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidature::Id))
                    .col(integer(Candidature::OfferId))
                    .col(integer(Candidature::StudentId))
                    .col(string(Candidature::Status).default("EN_ATTENTE"))
                    .col(
                        timestamp(Candidature::AppliedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidature_offer_id")
                            .from(Candidature::Table, Candidature::OfferId)
                            .to(Offer::Table, Offer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidature_student_id")
                            .from(Candidature::Table, Candidature::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_candidature_offer_status")
                    .table(Candidature::Table)
                    .col(Candidature::OfferId)
                    .col(Candidature::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidature::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Candidature {
    Table,
    Id,
    OfferId,
    StudentId,
    Status,
    AppliedAt,
}
