use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub creator_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::trip_member::Entity")]
    TripMember,
    #[sea_orm(has_many = "super::trip_invite::Entity")]
    TripInvite,
    #[sea_orm(has_many = "super::itinerary_item::Entity")]
    ItineraryItem,
    #[sea_orm(has_many = "super::cost::Entity")]
    Cost,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
    #[sea_orm(has_many = "super::poll::Entity")]
    Poll,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::trip_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripMember.def()
    }
}

impl Related<super::trip_invite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripInvite.def()
    }
}

impl Related<super::itinerary_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ItineraryItem.def()
    }
}

impl Related<super::cost::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cost.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::poll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Poll.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
