use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollStatusDto {
    Active,
    Expired,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PollOptionDto {
    pub id: i32,
    pub label: String,
    pub position: i32,
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    pub user_id: i32,
    pub option_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PollDto {
    pub id: i32,
    pub trip_id: i32,
    pub creator_id: i32,
    pub question: String,
    pub status: PollStatusDto,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub options: Vec<PollOptionDto>,
    pub votes: Vec<VoteDto>,
    /// Option the requesting user voted for, if any.
    pub my_vote: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePollDto {
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CastVoteDto {
    pub option_id: i32,
}
