use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cost_share")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cost_id: i32,
    pub user_id: i32,
    pub amount_cents: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cost::Entity",
        from = "Column::CostId",
        to = "super::cost::Column::Id"
    )]
    Cost,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::cost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
