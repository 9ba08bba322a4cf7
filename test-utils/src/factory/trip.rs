//! Trip factory for creating test trip entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips.
///
/// Only inserts the trip row. Use `helpers::create_trip_with_owner` when the creator
/// should also hold the owner membership.
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    name: String,
    description: Option<String>,
    destination: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Trip {id}"`
    /// - destination: `Some("Lisbon")`
    /// - description, start_date, end_date: `None`
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            name: format!("Trip {}", id),
            description: None,
            destination: Some("Lisbon".to_string()),
            start_date: None,
            end_date: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn destination(mut self, destination: Option<String>) -> Self {
        self.destination = destination;
        self
    }

    pub fn dates(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        let now = Utc::now();
        entity::trip::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            destination: ActiveValue::Set(self.destination),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip with default values for the given creator.
pub async fn create_trip(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, creator_id).build().await
}
