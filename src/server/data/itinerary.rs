use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::itinerary::{ItineraryItem, SaveItineraryItemParams};

pub struct ItineraryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItineraryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveItineraryItemParams) -> Result<ItineraryItem, DbErr> {
        let now = Utc::now();

        let item = entity::itinerary_item::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            location: ActiveValue::Set(params.location),
            kind: ActiveValue::Set(params.kind.as_str().to_string()),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ItineraryItem::from_entity(item)
    }

    /// Finds an item only if it belongs to the given trip.
    pub async fn find_in_trip(
        &self,
        trip_id: i32,
        id: i32,
    ) -> Result<Option<ItineraryItem>, DbErr> {
        let item = self.find_model(trip_id, id).await?;

        item.map(ItineraryItem::from_entity).transpose()
    }

    /// Gets the trip's itinerary in chronological order.
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<ItineraryItem>, DbErr> {
        let items = entity::prelude::ItineraryItem::find()
            .filter(entity::itinerary_item::Column::TripId.eq(trip_id))
            .order_by_asc(entity::itinerary_item::Column::StartTime)
            .order_by_asc(entity::itinerary_item::Column::Id)
            .all(self.db)
            .await?;

        items.into_iter().map(ItineraryItem::from_entity).collect()
    }

    /// Replaces an item's fields.
    ///
    /// # Returns
    /// - `Ok(Some(ItineraryItem))` - Updated item
    /// - `Ok(None)` - No item with that ID in the trip
    pub async fn update(
        &self,
        id: i32,
        params: SaveItineraryItemParams,
    ) -> Result<Option<ItineraryItem>, DbErr> {
        let Some(item) = self.find_model(params.trip_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::itinerary_item::ActiveModel = item.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.location = ActiveValue::Set(params.location);
        active_model.kind = ActiveValue::Set(params.kind.as_str().to_string());
        active_model.start_time = ActiveValue::Set(params.start_time);
        active_model.end_time = ActiveValue::Set(params.end_time);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let item = active_model.update(self.db).await?;

        ItineraryItem::from_entity(item).map(Some)
    }

    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ItineraryItem::delete_many()
            .filter(entity::itinerary_item::Column::TripId.eq(trip_id))
            .filter(entity::itinerary_item::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_model(
        &self,
        trip_id: i32,
        id: i32,
    ) -> Result<Option<entity::itinerary_item::Model>, DbErr> {
        entity::prelude::ItineraryItem::find_by_id(id)
            .filter(entity::itinerary_item::Column::TripId.eq(trip_id))
            .one(self.db)
            .await
    }
}
