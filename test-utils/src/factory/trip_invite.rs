//! Trip invitation factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating invitation rows.
///
/// Defaults to a pending invite for a fresh email address with no linked invitee.
pub struct TripInviteFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    inviter_id: i32,
    invitee_id: Option<i32>,
    email: String,
    status: String,
}

impl<'a> TripInviteFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, inviter_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            trip_id,
            inviter_id,
            invitee_id: None,
            email: format!("invitee{}@example.com", id),
            status: "pending".to_string(),
        }
    }

    /// Addresses the invite to an existing user.
    pub fn invitee(mut self, user: &entity::user::Model) -> Self {
        self.invitee_id = Some(user.id);
        self.email = user.email.clone();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the status, one of `pending`, `accepted` or `declined`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::trip_invite::Model, DbErr> {
        let now = Utc::now();
        entity::trip_invite::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            inviter_id: ActiveValue::Set(self.inviter_id),
            invitee_id: ActiveValue::Set(self.invitee_id),
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invite for a fresh email address.
pub async fn create_invite(
    db: &DatabaseConnection,
    trip_id: i32,
    inviter_id: i32,
) -> Result<entity::trip_invite::Model, DbErr> {
    TripInviteFactory::new(db, trip_id, inviter_id).build().await
}
