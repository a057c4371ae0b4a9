use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "affectation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub candidature_id: i32,
    /// User id of the teacher or admin who confirmed the placement.
    pub validated_by: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::candidature::Entity",
        from = "Column::CandidatureId",
        to = "super::candidature::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Candidature,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ValidatedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
}

impl Related<super::candidature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
