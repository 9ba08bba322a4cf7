use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{member::MemberRepository, trip::TripRepository},
    error::AppError,
    model::trip::{
        CreateTripParams, PaginatedTrips, TripRole, TripSummary, UpdateTripParams,
    },
    util::validate,
};

const MAX_TRIP_NAME_LEN: usize = 200;
const MAX_DESTINATION_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 5000;
const MAX_PER_PAGE: u64 = 100;

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trip and makes its creator the owner member in one transaction.
    ///
    /// # Returns
    /// - `Ok(TripSummary)` - New trip with a member count of one
    /// - `Err(AppError::BadRequest)` - Empty name, oversized text or end date before start date
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateTripParams) -> Result<TripSummary, AppError> {
        let params = CreateTripParams {
            creator_id: params.creator_id,
            name: validate::required_text("Name", &params.name, MAX_TRIP_NAME_LEN)?,
            description: validate::optional_text(
                "Description",
                params.description,
                MAX_DESCRIPTION_LEN,
            )?,
            destination: validate::optional_text(
                "Destination",
                params.destination,
                MAX_DESTINATION_LEN,
            )?,
            start_date: params.start_date,
            end_date: params.end_date,
        };
        validate::date_range(params.start_date, params.end_date)?;

        let txn = self.db.begin().await?;

        let trip = TripRepository::new(&txn).create(params).await?;
        MemberRepository::new(&txn)
            .add(trip.id, trip.creator_id, TripRole::Owner)
            .await?;

        txn.commit().await?;

        tracing::info!(trip_id = trip.id, creator_id = trip.creator_id, "Created trip");

        Ok(TripSummary {
            trip,
            member_count: 1,
            role: TripRole::Owner,
        })
    }

    /// Gets the trips a user created or joined, newest first.
    ///
    /// `page` is zero-based; `per_page` is clamped to 1..=100. A page whose row offset
    /// overflows is rejected with `AppError::BadRequest`.
    pub async fn list_for_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTrips, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        // The row offset must fit the database's signed 64-bit OFFSET.
        if page
            .checked_mul(per_page)
            .is_none_or(|offset| offset > i64::MAX as u64)
        {
            return Err(AppError::BadRequest("Page is out of range".to_string()));
        }

        let (trips, total) = TripRepository::new(self.db)
            .get_for_user_paginated(user_id, page, per_page)
            .await?;

        Ok(PaginatedTrips {
            trips,
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        })
    }

    pub async fn get(&self, trip_id: i32, user_id: i32) -> Result<TripSummary, AppError> {
        TripRepository::new(self.db)
            .get_summary(trip_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
    }

    /// Replaces a trip's details and returns it as seen by the editing user.
    pub async fn update(
        &self,
        params: UpdateTripParams,
        user_id: i32,
    ) -> Result<TripSummary, AppError> {
        let params = UpdateTripParams {
            id: params.id,
            name: validate::required_text("Name", &params.name, MAX_TRIP_NAME_LEN)?,
            description: validate::optional_text(
                "Description",
                params.description,
                MAX_DESCRIPTION_LEN,
            )?,
            destination: validate::optional_text(
                "Destination",
                params.destination,
                MAX_DESTINATION_LEN,
            )?,
            start_date: params.start_date,
            end_date: params.end_date,
        };
        validate::date_range(params.start_date, params.end_date)?;

        let trip_id = params.id;
        let repo = TripRepository::new(self.db);

        if repo.update(params).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        self.get(trip_id, user_id).await
    }

    /// Deletes a trip with all of its members, invitations and content.
    pub async fn delete(&self, trip_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let repo = TripRepository::new(&txn);
        if repo.find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }
        repo.delete_with_contents(trip_id).await?;

        txn.commit().await?;

        tracing::info!(trip_id, "Deleted trip");

        Ok(())
    }
}
