//! Poll factory, inserting the poll together with its options.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating polls.
///
/// Defaults to an open poll with two options expiring in one day.
pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    creator_id: i32,
    question: String,
    options: Vec<String>,
    closed: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> PollFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            trip_id,
            creator_id,
            question: format!("Question {}?", id),
            options: vec!["Yes".to_string(), "No".to_string()],
            closed: false,
            expires_at: Some(Utc::now() + Duration::days(1)),
        }
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Sets the expiry; a past value yields an already expired poll.
    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Inserts the poll and its options.
    ///
    /// # Returns
    /// - `Ok((poll, options))` - The poll and its options in position order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::poll::Model, Vec<entity::poll_option::Model>), DbErr> {
        let poll = entity::poll::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            creator_id: ActiveValue::Set(self.creator_id),
            question: ActiveValue::Set(self.question),
            closed: ActiveValue::Set(self.closed),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut options = Vec::with_capacity(self.options.len());
        for (position, label) in self.options.into_iter().enumerate() {
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

        Ok((poll, options))
    }
}

pub async fn create_poll(
    db: &DatabaseConnection,
    trip_id: i32,
    creator_id: i32,
) -> Result<(entity::poll::Model, Vec<entity::poll_option::Model>), DbErr> {
    PollFactory::new(db, trip_id, creator_id).build().await
}
