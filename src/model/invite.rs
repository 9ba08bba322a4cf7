use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatusDto {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripInviteDto {
    pub id: i32,
    pub trip_id: i32,
    pub trip_name: String,
    pub inviter_id: i32,
    pub inviter_name: String,
    /// Set once the invited email belongs to a registered user.
    pub invitee_id: Option<i32>,
    pub email: String,
    pub status: InviteStatusDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateInviteDto {
    pub email: String,
}
