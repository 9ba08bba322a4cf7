use chrono::Utc;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::trip::{
    CreateTripParams, Trip, TripRole, TripSummary, UpdateTripParams,
};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the trip row. The owner membership is added separately by the caller.
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, DbErr> {
        let now = Utc::now();

        let trip = entity::trip::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            destination: ActiveValue::Set(params.destination),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            creator_id: ActiveValue::Set(params.creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Trip::from_entity(trip))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        let trip = entity::prelude::Trip::find_by_id(id).one(self.db).await?;

        Ok(trip.map(Trip::from_entity))
    }

    /// Gets trips the user created or belongs to, newest first.
    ///
    /// # Returns
    /// - `Ok((trips, total))` - Trips on the requested page and the total across all pages
    pub async fn get_for_user_paginated(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<TripSummary>, u64), DbErr> {
        let memberships = Query::select()
            .column(entity::trip_member::Column::TripId)
            .from(entity::prelude::TripMember)
            .and_where(entity::trip_member::Column::UserId.eq(user_id))
            .to_owned();

        let query = entity::prelude::Trip::find()
            .filter(
                Condition::any()
                    .add(entity::trip::Column::CreatorId.eq(user_id))
                    .add(entity::trip::Column::Id.in_subquery(memberships)),
            )
            .order_by_desc(entity::trip::Column::CreatedAt)
            .order_by_desc(entity::trip::Column::Id);

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let trips = paginator.fetch_page(page).await?;

        let trips = self.summarize(trips, user_id).await?;

        Ok((trips, total))
    }

    /// Gets one trip as seen by a user, or `None` if the trip does not exist.
    pub async fn get_summary(
        &self,
        trip_id: i32,
        user_id: i32,
    ) -> Result<Option<TripSummary>, DbErr> {
        let Some(trip) = entity::prelude::Trip::find_by_id(trip_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.summarize(vec![trip], user_id).await?.pop())
    }

    /// Attaches member counts and the viewer's role to a page of trips.
    async fn summarize(
        &self,
        trips: Vec<entity::trip::Model>,
        user_id: i32,
    ) -> Result<Vec<TripSummary>, DbErr> {
        if trips.is_empty() {
            return Ok(Vec::new());
        }

        let trip_ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
        let members = entity::prelude::TripMember::find()
            .filter(entity::trip_member::Column::TripId.is_in(trip_ids))
            .all(self.db)
            .await?;

        let mut counts: HashMap<i32, u64> = HashMap::new();
        let mut roles: HashMap<i32, TripRole> = HashMap::new();
        for member in &members {
            *counts.entry(member.trip_id).or_default() += 1;
            if member.user_id == user_id {
                roles.insert(member.trip_id, TripRole::parse(&member.role)?);
            }
        }

        Ok(trips
            .into_iter()
            .map(|trip| {
                let role = roles.get(&trip.id).copied().unwrap_or(if trip.creator_id == user_id {
                    TripRole::Owner
                } else {
                    TripRole::Member
                });

                TripSummary {
                    member_count: counts.get(&trip.id).copied().unwrap_or(0),
                    role,
                    trip: Trip::from_entity(trip),
                }
            })
            .collect())
    }

    /// Replaces a trip's editable fields.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Updated trip
    /// - `Ok(None)` - Trip not found
    pub async fn update(&self, params: UpdateTripParams) -> Result<Option<Trip>, DbErr> {
        let Some(trip) = entity::prelude::Trip::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::trip::ActiveModel = trip.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.description = ActiveValue::Set(params.description);
        active_model.destination = ActiveValue::Set(params.destination);
        active_model.start_date = ActiveValue::Set(params.start_date);
        active_model.end_date = ActiveValue::Set(params.end_date);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let trip = active_model.update(self.db).await?;

        Ok(Some(Trip::from_entity(trip)))
    }

    /// IDs of trips created by the user.
    pub async fn find_ids_created_by(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::CreatorId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(trips.into_iter().map(|t| t.id).collect())
    }

    /// Whether the user is the trip's creator or one of its members.
    pub async fn is_participant(&self, trip_id: i32, user_id: i32) -> Result<bool, DbErr> {
        Ok(self.participant_ids(trip_id).await?.contains(&user_id))
    }

    /// IDs of everyone taking part in the trip (creator and members), ascending.
    pub async fn participant_ids(&self, trip_id: i32) -> Result<Vec<i32>, DbErr> {
        let Some(trip) = entity::prelude::Trip::find_by_id(trip_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let mut ids: Vec<i32> = entity::prelude::TripMember::find()
            .filter(entity::trip_member::Column::TripId.eq(trip_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| m.user_id)
            .collect();
        ids.push(trip.creator_id);
        ids.sort_unstable();
        ids.dedup();

        Ok(ids)
    }

    /// Deletes a trip and everything that belongs to it.
    ///
    /// Rows are removed children first so foreign keys hold at every step. Run inside a
    /// transaction to make the cascade atomic.
    pub async fn delete_with_contents(&self, trip_id: i32) -> Result<(), DbErr> {
        let poll_ids: Vec<i32> = entity::prelude::Poll::find()
            .filter(entity::poll::Column::TripId.eq(trip_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        if !poll_ids.is_empty() {
            entity::prelude::Vote::delete_many()
                .filter(entity::vote::Column::PollId.is_in(poll_ids.clone()))
                .exec(self.db)
                .await?;
            entity::prelude::PollOption::delete_many()
                .filter(entity::poll_option::Column::PollId.is_in(poll_ids))
                .exec(self.db)
                .await?;
        }
        entity::prelude::Poll::delete_many()
            .filter(entity::poll::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        entity::prelude::Task::delete_many()
            .filter(entity::task::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        let cost_ids: Vec<i32> = entity::prelude::Cost::find()
            .filter(entity::cost::Column::TripId.eq(trip_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        if !cost_ids.is_empty() {
            entity::prelude::CostShare::delete_many()
                .filter(entity::cost_share::Column::CostId.is_in(cost_ids))
                .exec(self.db)
                .await?;
        }
        entity::prelude::Cost::delete_many()
            .filter(entity::cost::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        entity::prelude::ItineraryItem::delete_many()
            .filter(entity::itinerary_item::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;
        entity::prelude::TripInvite::delete_many()
            .filter(entity::trip_invite::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;
        entity::prelude::TripMember::delete_many()
            .filter(entity::trip_member::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        entity::prelude::Trip::delete_by_id(trip_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
