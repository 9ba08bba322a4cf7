use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cost")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trip_id: i32,
    pub description: String,
    /// Amount in minor currency units.
    pub amount_cents: i64,
    pub currency: String,
    pub category: Option<String>,
    pub paid_by_id: i32,
    pub incurred_on: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trip::Entity",
        from = "Column::TripId",
        to = "super::trip::Column::Id"
    )]
    Trip,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PaidById",
        to = "super::user::Column::Id"
    )]
    PaidBy,
    #[sea_orm(has_many = "super::cost_share::Entity")]
    CostShare,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::cost_share::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CostShare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
