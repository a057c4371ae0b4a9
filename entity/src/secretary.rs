use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "secretary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    /// Current leave flag. History lives in `secretary_leave_log`.
    pub on_leave: bool,
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
    #[sea_orm(has_many = "super::student_group::Entity")]
    StudentGroup,
    #[sea_orm(has_many = "super::secretary_leave_log::Entity")]
    SecretaryLeaveLog,
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

impl Related<super::secretary_leave_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SecretaryLeaveLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
