//! Trip polls and voting.
//!
//! A poll is `ACTIVE` until its creator closes it or its expiry passes. Expiry is never
//! written back; every read and vote derives the status from the current time, so an
//! expired poll rejects votes the moment `expires_at` is reached.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashSet;

use crate::server::{
    data::{poll::PollRepository, trip::TripRepository},
    error::{auth::AuthError, AppError},
    model::poll::{CastVoteParams, CreatePollParams, Poll, PollStatus},
    util::validate,
};

const MAX_QUESTION_LEN: usize = 300;
const MAX_OPTION_LEN: usize = 200;
const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 20;

pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a poll with its options in one transaction.
    ///
    /// Option labels are trimmed and must be distinct, ignoring case. Options keep the
    /// order they were submitted in.
    ///
    /// # Returns
    /// - `Ok(Poll)` - Created poll with no votes
    /// - `Err(AppError::BadRequest)` - Empty question, fewer than two distinct options,
    ///   or an expiry that is not in the future
    pub async fn create(&self, params: CreatePollParams) -> Result<Poll, AppError> {
        let question = validate::required_text("Question", &params.question, MAX_QUESTION_LEN)?;
        let options = normalize_options(params.options)?;

        if let Some(expires_at) = params.expires_at {
            if expires_at <= Utc::now() {
                return Err(AppError::BadRequest(
                    "Expiry must be in the future".to_string(),
                ));
            }
        }

        let txn = self.db.begin().await?;

        let poll = PollRepository::new(&txn)
            .create(CreatePollParams {
                trip_id: params.trip_id,
                creator_id: params.creator_id,
                question,
                options,
                expires_at: params.expires_at,
            })
            .await?;

        txn.commit().await?;

        tracing::debug!(poll_id = poll.id, trip_id = poll.trip_id, "Created poll");

        Ok(poll)
    }

    pub async fn list(&self, trip_id: i32) -> Result<Vec<Poll>, AppError> {
        Ok(PollRepository::new(self.db)
            .get_by_trip(trip_id, Utc::now())
            .await?)
    }

    pub async fn get(&self, trip_id: i32, poll_id: i32) -> Result<Poll, AppError> {
        PollRepository::new(self.db)
            .find_in_trip(trip_id, poll_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Poll not found".to_string()))
    }

    /// Casts or changes a vote.
    ///
    /// A user holds at most one vote per poll; voting again replaces the earlier choice.
    ///
    /// # Returns
    /// - `Ok(Poll)` - Poll with updated tallies
    /// - `Err(AppError::NotFound)` - Poll not found in the trip
    /// - `Err(AppError::BadRequest)` - Poll closed or expired, or option not in the poll
    pub async fn vote(&self, params: CastVoteParams) -> Result<Poll, AppError> {
        let poll = self.get(params.trip_id, params.poll_id).await?;
        ensure_active(&poll)?;

        if !poll.has_option(params.option_id) {
            return Err(AppError::BadRequest(
                "Option does not belong to this poll".to_string(),
            ));
        }

        PollRepository::new(self.db)
            .upsert_vote(poll.id, params.option_id, params.user_id)
            .await?;

        self.get(params.trip_id, params.poll_id).await
    }

    /// Withdraws the user's vote from an active poll.
    pub async fn retract_vote(
        &self,
        trip_id: i32,
        poll_id: i32,
        user_id: i32,
    ) -> Result<Poll, AppError> {
        let poll = self.get(trip_id, poll_id).await?;
        ensure_active(&poll)?;

        if !PollRepository::new(self.db)
            .delete_vote(poll.id, user_id)
            .await?
        {
            return Err(AppError::NotFound("No vote to retract".to_string()));
        }

        self.get(trip_id, poll_id).await
    }

    /// Closes a poll. Only its creator may close it; closing twice is a no-op.
    pub async fn close(&self, trip_id: i32, poll_id: i32, user_id: i32) -> Result<Poll, AppError> {
        let poll = self.get(trip_id, poll_id).await?;

        if poll.creator_id != user_id {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("Only the creator can close poll {}", poll_id),
            )
            .into());
        }

        if poll.status == PollStatus::Closed {
            return Ok(poll);
        }

        PollRepository::new(self.db).close(poll.id).await?;

        tracing::debug!(poll_id, trip_id, "Closed poll");

        self.get(trip_id, poll_id).await
    }

    /// Deletes a poll with its options and votes.
    ///
    /// Allowed for the poll creator and the trip creator.
    pub async fn delete(&self, trip_id: i32, poll_id: i32, user_id: i32) -> Result<(), AppError> {
        let poll = self.get(trip_id, poll_id).await?;

        if poll.creator_id != user_id {
            let trip = TripRepository::new(self.db)
                .find_by_id(trip_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

            if trip.creator_id != user_id {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "Only the poll creator or trip creator can delete poll {}",
                        poll_id
                    ),
                )
                .into());
            }
        }

        let txn = self.db.begin().await?;
        PollRepository::new(&txn).delete_by_ids(vec![poll.id]).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn ensure_active(poll: &Poll) -> Result<(), AppError> {
    match poll.status {
        PollStatus::Active => Ok(()),
        PollStatus::Expired => Err(AppError::BadRequest("This poll has expired".to_string())),
        PollStatus::Closed => Err(AppError::BadRequest("This poll is closed".to_string())),
    }
}

/// Trims option labels, drops blank ones and rejects duplicates.
fn normalize_options(options: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(options.len());

    for option in options {
        let label = option.trim();
        if label.is_empty() {
            continue;
        }
        if label.chars().count() > MAX_OPTION_LEN {
            return Err(AppError::BadRequest(format!(
                "Options must be at most {} characters",
                MAX_OPTION_LEN
            )));
        }
        if !seen.insert(label.to_lowercase()) {
            return Err(AppError::BadRequest(format!(
                "Option '{}' is listed more than once",
                label
            )));
        }
        normalized.push(label.to_string());
    }

    if normalized.len() < MIN_OPTIONS {
        return Err(AppError::BadRequest(format!(
            "A poll needs at least {} options",
            MIN_OPTIONS
        )));
    }
    if normalized.len() > MAX_OPTIONS {
        return Err(AppError::BadRequest(format!(
            "A poll can have at most {} options",
            MAX_OPTIONS
        )));
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(options: &[&str]) -> Vec<String> {
        options.iter().map(|o| o.to_string()).collect()
    }

    #[test]
    fn trims_options_and_skips_blanks() {
        let options = normalize_options(labels(&[" Lisbon ", "", "Porto", "   "])).unwrap();

        assert_eq!(options, vec!["Lisbon", "Porto"]);
    }

    #[test]
    fn rejects_duplicate_options_ignoring_case() {
        let result = normalize_options(labels(&["Beach", "beach "]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn requires_two_options() {
        let result = normalize_options(labels(&["Only one", " "]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
