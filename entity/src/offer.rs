use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    pub offer_type: String,
    pub title: String,
    pub description: Option<String>,
    pub skills: Option<String>,
    pub country: String,
    pub city: Option<String>,
    pub duration_months: i32,
    pub remuneration: f64,
    pub start_date: Date,
    pub expiration_date: Date,
    /// One of `PENDING`, `VALIDATED`, `REJECTED`.
    pub validation_status: String,
    pub submitted_at: DateTimeUtc,
    pub validated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(has_many = "super::candidature::Entity")]
    Candidature,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::candidature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
