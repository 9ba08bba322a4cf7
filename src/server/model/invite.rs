//! Trip invitation domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::invite::{InviteStatusDto, TripInviteDto};

/// Lifecycle of an invitation. Only pending invitations can be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteStatus {
    Pending,
    Accepted,
    Declined,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DbErr> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(DbErr::Custom(format!("Unknown invite status '{}'", other))),
        }
    }

    pub fn into_dto(self) -> InviteStatusDto {
        match self {
            Self::Pending => InviteStatusDto::Pending,
            Self::Accepted => InviteStatusDto::Accepted,
            Self::Declined => InviteStatusDto::Declined,
        }
    }
}

/// Invitation enriched with the trip and inviter names for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TripInvite {
    pub id: i32,
    pub trip_id: i32,
    pub trip_name: String,
    pub inviter_id: i32,
    pub inviter_name: String,
    pub invitee_id: Option<i32>,
    pub email: String,
    pub status: InviteStatus,
    pub created_at: DateTime<Utc>,
}

impl TripInvite {
    /// Converts an invite entity at the repository boundary.
    ///
    /// Names fall back to placeholders when the related rows are missing.
    pub fn from_entity(
        entity: entity::trip_invite::Model,
        trip: Option<&entity::trip::Model>,
        inviter: Option<&entity::user::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            trip_id: entity.trip_id,
            trip_name: trip
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("Trip {}", entity.trip_id)),
            inviter_id: entity.inviter_id,
            inviter_name: inviter
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown user".to_string()),
            invitee_id: entity.invitee_id,
            email: entity.email,
            status: InviteStatus::parse(&entity.status)?,
            created_at: entity.created_at,
        })
    }

    /// Whether the invite is addressed to the given user, by id or by email.
    pub fn is_addressed_to(&self, user_id: i32, email: &str) -> bool {
        match self.invitee_id {
            Some(invitee_id) => invitee_id == user_id,
            None => self.email == email,
        }
    }

    pub fn into_dto(self) -> TripInviteDto {
        TripInviteDto {
            id: self.id,
            trip_id: self.trip_id,
            trip_name: self.trip_name,
            inviter_id: self.inviter_id,
            inviter_name: self.inviter_name,
            invitee_id: self.invitee_id,
            email: self.email,
            status: self.status.into_dto(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInviteParams {
    pub trip_id: i32,
    pub inviter_id: i32,
    /// Raw address as submitted; normalized by the service.
    pub email: String,
}

/// Row values for a new pending invitation.
#[derive(Debug, Clone)]
pub struct NewInvite {
    pub trip_id: i32,
    pub inviter_id: i32,
    pub invitee_id: Option<i32>,
    pub email: String,
}
