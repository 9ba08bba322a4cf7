//! Poll domain models.
//!
//! Poll status is never stored. It is derived from the `closed` flag and the optional
//! expiry each time a poll is loaded.

use chrono::{DateTime, Utc};

use crate::model::poll::{CreatePollDto, PollDto, PollOptionDto, PollStatusDto, VoteDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    Active,
    Expired,
    Closed,
}

impl PollStatus {
    /// Derives the status at instant `now`.
    ///
    /// A closed poll stays closed regardless of expiry. A poll expires at exactly
    /// `expires_at`.
    pub fn at(closed: bool, expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        if closed {
            return Self::Closed;
        }
        match expires_at {
            Some(expires_at) if expires_at <= now => Self::Expired,
            _ => Self::Active,
        }
    }

    pub fn into_dto(self) -> PollStatusDto {
        match self {
            Self::Active => PollStatusDto::Active,
            Self::Expired => PollStatusDto::Expired,
            Self::Closed => PollStatusDto::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollOption {
    pub id: i32,
    pub label: String,
    pub position: i32,
    pub votes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: i32,
    pub trip_id: i32,
    pub creator_id: i32,
    pub question: String,
    pub status: PollStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Options in position order with their vote tallies.
    pub options: Vec<PollOption>,
    /// Votes ordered by user ID.
    pub votes: Vec<Vote>,
}

impl Poll {
    /// Assembles a poll from its rows, tallying votes per option.
    pub fn from_entity(
        poll: entity::poll::Model,
        mut options: Vec<entity::poll_option::Model>,
        votes: &[entity::vote::Model],
        now: DateTime<Utc>,
    ) -> Self {
        options.sort_by_key(|o| (o.position, o.id));

        let options = options
            .into_iter()
            .map(|o| PollOption {
                votes: votes.iter().filter(|v| v.option_id == o.id).count() as u64,
                id: o.id,
                label: o.label,
                position: o.position,
            })
            .collect();

        let mut votes: Vec<Vote> = votes
            .iter()
            .map(|v| Vote {
                user_id: v.user_id,
                option_id: v.option_id,
            })
            .collect();
        votes.sort_by_key(|v| v.user_id);

        Self {
            id: poll.id,
            trip_id: poll.trip_id,
            creator_id: poll.creator_id,
            question: poll.question,
            status: PollStatus::at(poll.closed, poll.expires_at, now),
            expires_at: poll.expires_at,
            created_at: poll.created_at,
            options,
            votes,
        }
    }

    pub fn has_option(&self, option_id: i32) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }

    pub fn vote_of(&self, user_id: i32) -> Option<i32> {
        self.votes
            .iter()
            .find(|v| v.user_id == user_id)
            .map(|v| v.option_id)
    }

    /// Converts to a DTO from the perspective of `viewer_id`, filling in `my_vote`.
    pub fn into_dto(self, viewer_id: i32) -> PollDto {
        let my_vote = self.vote_of(viewer_id);

        PollDto {
            id: self.id,
            trip_id: self.trip_id,
            creator_id: self.creator_id,
            question: self.question,
            status: self.status.into_dto(),
            expires_at: self.expires_at,
            created_at: self.created_at,
            options: self
                .options
                .into_iter()
                .map(|o| PollOptionDto {
                    id: o.id,
                    label: o.label,
                    position: o.position,
                    votes: o.votes,
                })
                .collect(),
            votes: self
                .votes
                .into_iter()
                .map(|v| VoteDto {
                    user_id: v.user_id,
                    option_id: v.option_id,
                })
                .collect(),
            my_vote,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePollParams {
    pub trip_id: i32,
    pub creator_id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreatePollParams {
    pub fn from_dto(trip_id: i32, creator_id: i32, dto: CreatePollDto) -> Self {
        Self {
            trip_id,
            creator_id,
            question: dto.question,
            options: dto.options,
            expires_at: dto.expires_at,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CastVoteParams {
    pub trip_id: i32,
    pub poll_id: i32,
    pub user_id: i32,
    pub option_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn open_poll_without_expiry_is_active() {
        assert_eq!(PollStatus::at(false, None, Utc::now()), PollStatus::Active);
    }

    #[test]
    fn poll_expires_at_exact_instant() {
        let now = Utc::now();

        assert_eq!(PollStatus::at(false, Some(now), now), PollStatus::Expired);
        assert_eq!(
            PollStatus::at(false, Some(now + Duration::seconds(1)), now),
            PollStatus::Active
        );
    }

    #[test]
    fn closed_takes_precedence_over_expiry() {
        let now = Utc::now();

        assert_eq!(
            PollStatus::at(true, Some(now - Duration::hours(1)), now),
            PollStatus::Closed
        );
        assert_eq!(PollStatus::at(true, None, now), PollStatus::Closed);
    }
}
