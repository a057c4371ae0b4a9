use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub group_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::student_group::Entity",
        from = "Column::GroupId",
        to = "super::student_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    StudentGroup,
    #[sea_orm(has_many = "super::candidature::Entity")]
    Candidature,
    #[sea_orm(has_one = "super::rc_attestation::Entity")]
    RcAttestation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroup.def()
    }
}

impl Related<super::candidature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidature.def()
    }
}

impl Related<super::rc_attestation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RcAttestation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
