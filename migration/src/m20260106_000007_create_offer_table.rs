use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offer::Table)
                    .if_not_exists()
                    .col(pk_auto(Offer::Id))
                    .col(integer(Offer::CompanyId))
                    .col(string(Offer::OfferType))
                    .col(string(Offer::Title))
                    .col(text_null(Offer::Description))
                    .col(text_null(Offer::Skills))
                    .col(string(Offer::Country))
                    .col(string_null(Offer::City))
                    .col(integer(Offer::DurationMonths))
                    .col(double(Offer::Remuneration))
                    .col(date(Offer::StartDate))
                    .col(date(Offer::ExpirationDate))
                    .col(string(Offer::ValidationStatus).default("PENDING"))
                    .col(
                        timestamp(Offer::SubmittedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Offer::ValidatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_offer_company_id")
                            .from(Offer::Table, Offer::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offer_company_id")
                    .table(Offer::Table)
                    .col(Offer::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Offer {
    Table,
    Id,
    CompanyId,
    OfferType,
    Title,
    Description,
    Skills,
    Country,
    City,
    DurationMonths,
    Remuneration,
    StartDate,
    ExpirationDate,
    ValidationStatus,
    SubmittedAt,
    ValidatedAt,
}
