use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000003_create_teacher_table::Teacher,
    m20260105_000004_create_secretary_table::Secretary,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentGroup::Id))
                    .col(string(StudentGroup::Name))
                    .col(integer(StudentGroup::SecretaryId))
                    .col(integer_null(StudentGroup::ReferentTeacherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_secretary_id")
                            .from(StudentGroup::Table, StudentGroup::SecretaryId)
                            .to(Secretary::Table, Secretary::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_group_referent_teacher_id")
                            .from(StudentGroup::Table, StudentGroup::ReferentTeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentGroup {
    Table,
    Id,
    Name,
    SecretaryId,
    ReferentTeacherId,
}
