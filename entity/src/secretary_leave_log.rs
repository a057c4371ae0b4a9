use sea_orm::entity::prelude::*;

/// Append-only record of every leave toggle.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "secretary_leave_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub secretary_id: i32,
    pub on_leave: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::secretary::Entity",
        from = "Column::SecretaryId",
        to = "super::secretary::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Secretary,
}

impl Related<super::secretary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Secretary.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
