use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::poll::{CreatePollParams, Poll};

pub struct PollRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PollRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a poll and its options, numbering options in the given order.
    pub async fn create(&self, params: CreatePollParams) -> Result<Poll, DbErr> {
        let now = Utc::now();

        let poll = entity::poll::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            creator_id: ActiveValue::Set(params.creator_id),
            question: ActiveValue::Set(params.question),
            closed: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(params.expires_at),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut options = Vec::with_capacity(params.options.len());
        for (position, label) in params.options.into_iter().enumerate() {
            let option = entity::poll_option::ActiveModel {
                poll_id: ActiveValue::Set(poll.id),
                label: ActiveValue::Set(label),
                position: ActiveValue::Set(position as i32),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            options.push(option);
        }

        Ok(Poll::from_entity(poll, options, &[], now))
    }

    /// Loads a poll with options and votes if it belongs to the trip.
    ///
    /// Status is derived relative to `now`.
    pub async fn find_in_trip(
        &self,
        trip_id: i32,
        poll_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Poll>, DbErr> {
        let Some(poll) = entity::prelude::Poll::find_by_id(poll_id)
            .filter(entity::poll::Column::TripId.eq(trip_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load(vec![poll], now).await?.pop())
    }

    /// Gets all polls of a trip, newest first.
    pub async fn get_by_trip(&self, trip_id: i32, now: DateTime<Utc>) -> Result<Vec<Poll>, DbErr> {
        let polls = entity::prelude::Poll::find()
            .filter(entity::poll::Column::TripId.eq(trip_id))
            .order_by_desc(entity::poll::Column::CreatedAt)
            .order_by_desc(entity::poll::Column::Id)
            .all(self.db)
            .await?;

        self.load(polls, now).await
    }

    pub async fn close(&self, poll_id: i32) -> Result<(), DbErr> {
        entity::poll::ActiveModel {
            id: ActiveValue::Unchanged(poll_id),
            closed: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Records a user's vote, replacing any earlier vote on the same poll.
    pub async fn upsert_vote(
        &self,
        poll_id: i32,
        option_id: i32,
        user_id: i32,
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        let vote = entity::vote::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            option_id: ActiveValue::Set(option_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Vote::insert(vote)
            .on_conflict(
                OnConflict::columns([entity::vote::Column::PollId, entity::vote::Column::UserId])
                    .update_columns([
                        entity::vote::Column::OptionId,
                        entity::vote::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes a user's vote on a poll.
    ///
    /// # Returns
    /// - `Ok(true)` - Vote removed
    /// - `Ok(false)` - User had not voted
    pub async fn delete_vote(&self, poll_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::PollId.eq(poll_id))
            .filter(entity::vote::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user's votes, limited to one trip's polls when `trip_id` is given.
    pub async fn delete_votes_by_user(
        &self,
        user_id: i32,
        trip_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::UserId.eq(user_id));

        if let Some(trip_id) = trip_id {
            let poll_ids: Vec<i32> = entity::prelude::Poll::find()
                .filter(entity::poll::Column::TripId.eq(trip_id))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| p.id)
                .collect();

            if poll_ids.is_empty() {
                return Ok(0);
            }
            query = query.filter(entity::vote::Column::PollId.is_in(poll_ids));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// IDs of all polls created by a user, across trips.
    pub async fn find_ids_created_by(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let polls = entity::prelude::Poll::find()
            .filter(entity::poll::Column::CreatorId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(polls.into_iter().map(|p| p.id).collect())
    }

    /// Deletes polls with their options and votes.
    pub async fn delete_by_ids(&self, ids: Vec<i32>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::PollId.is_in(ids.clone()))
            .exec(self.db)
            .await?;
        entity::prelude::PollOption::delete_many()
            .filter(entity::poll_option::Column::PollId.is_in(ids.clone()))
            .exec(self.db)
            .await?;
        entity::prelude::Poll::delete_many()
            .filter(entity::poll::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Loads options and votes for a batch of polls, keeping the input order.
    async fn load(
        &self,
        polls: Vec<entity::poll::Model>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Poll>, DbErr> {
        if polls.is_empty() {
            return Ok(Vec::new());
        }

        let poll_ids: Vec<i32> = polls.iter().map(|p| p.id).collect();

        let mut options: HashMap<i32, Vec<entity::poll_option::Model>> = HashMap::new();
        for option in entity::prelude::PollOption::find()
            .filter(entity::poll_option::Column::PollId.is_in(poll_ids.clone()))
            .all(self.db)
            .await?
        {
            options.entry(option.poll_id).or_default().push(option);
        }

        let mut votes: HashMap<i32, Vec<entity::vote::Model>> = HashMap::new();
        for vote in entity::prelude::Vote::find()
            .filter(entity::vote::Column::PollId.is_in(poll_ids))
            .all(self.db)
            .await?
        {
            votes.entry(vote.poll_id).or_default().push(vote);
        }

        Ok(polls
            .into_iter()
            .map(|poll| {
                let poll_options = options.remove(&poll.id).unwrap_or_default();
                let poll_votes = votes.remove(&poll.id).unwrap_or_default();
                Poll::from_entity(poll, poll_options, &poll_votes, now)
            })
            .collect())
    }
}
