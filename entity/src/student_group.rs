use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub secretary_id: i32,
    pub referent_teacher_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::secretary::Entity",
        from = "Column::SecretaryId",
        to = "super::secretary::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Secretary,
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::ReferentTeacherId",
        to = "super::teacher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::secretary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Secretary.def()
    }
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
