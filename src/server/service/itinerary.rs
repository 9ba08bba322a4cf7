use sea_orm::DatabaseConnection;

use crate::server::{
    data::itinerary::ItineraryRepository,
    error::AppError,
    model::itinerary::{ItineraryItem, SaveItineraryItemParams},
    service::trip::MAX_DESCRIPTION_LEN,
    util::validate,
};

const MAX_TITLE_LEN: usize = 200;
const MAX_LOCATION_LEN: usize = 300;

pub struct ItineraryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItineraryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveItineraryItemParams) -> Result<ItineraryItem, AppError> {
        let params = Self::validate(params)?;

        let item = ItineraryRepository::new(self.db).create(params).await?;

        Ok(item)
    }

    /// Gets the trip's itinerary ordered by start time.
    pub async fn list(&self, trip_id: i32) -> Result<Vec<ItineraryItem>, AppError> {
        Ok(ItineraryRepository::new(self.db).get_by_trip(trip_id).await?)
    }

    pub async fn get(&self, trip_id: i32, id: i32) -> Result<ItineraryItem, AppError> {
        ItineraryRepository::new(self.db)
            .find_in_trip(trip_id, id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveItineraryItemParams,
    ) -> Result<ItineraryItem, AppError> {
        let params = Self::validate(params)?;

        ItineraryRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<(), AppError> {
        if !ItineraryRepository::new(self.db).delete(trip_id, id).await? {
            return Err(not_found());
        }
        Ok(())
    }

    /// Trims text fields and rejects an end time before the start time.
    fn validate(params: SaveItineraryItemParams) -> Result<SaveItineraryItemParams, AppError> {
        if let Some(end_time) = params.end_time {
            if end_time < params.start_time {
                return Err(AppError::BadRequest(
                    "End time must not be before start time".to_string(),
                ));
            }
        }

        Ok(SaveItineraryItemParams {
            trip_id: params.trip_id,
            title: validate::required_text("Title", &params.title, MAX_TITLE_LEN)?,
            description: validate::optional_text(
                "Description",
                params.description,
                MAX_DESCRIPTION_LEN,
            )?,
            location: validate::optional_text("Location", params.location, MAX_LOCATION_LEN)?,
            kind: params.kind,
            start_time: params.start_time,
            end_time: params.end_time,
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Itinerary item not found".to_string())
}
