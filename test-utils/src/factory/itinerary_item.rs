//! Itinerary item factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating itinerary items.
pub struct ItineraryItemFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    title: String,
    kind: String,
    location: Option<String>,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

impl<'a> ItineraryItemFactory<'a> {
    /// Defaults to an `activity` starting one day from now, lasting two hours.
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        let id = next_id();
        let start_time = Utc::now() + Duration::days(1);
        Self {
            db,
            trip_id,
            title: format!("Item {}", id),
            kind: "activity".to_string(),
            location: None,
            start_time,
            end_time: Some(start_time + Duration::hours(2)),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = None;
        self
    }

    pub async fn build(self) -> Result<entity::itinerary_item::Model, DbErr> {
        let now = Utc::now();
        entity::itinerary_item::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            kind: ActiveValue::Set(self.kind),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_item(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::itinerary_item::Model, DbErr> {
    ItineraryItemFactory::new(db, trip_id).build().await
}
