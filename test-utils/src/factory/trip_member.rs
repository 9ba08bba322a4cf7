//! Trip membership factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating trip membership rows.
pub struct TripMemberFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    user_id: i32,
    role: String,
}

impl<'a> TripMemberFactory<'a> {
    /// Creates a new factory for the given trip and user with the `member` role.
    pub fn new(db: &'a DatabaseConnection, trip_id: i32, user_id: i32) -> Self {
        Self {
            db,
            trip_id,
            user_id,
            role: "member".to_string(),
        }
    }

    /// Sets the role, either `owner` or `member`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub async fn build(self) -> Result<entity::trip_member::Model, DbErr> {
        entity::trip_member::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Adds a user to a trip as a regular member.
pub async fn create_membership(
    db: &DatabaseConnection,
    trip_id: i32,
    user_id: i32,
) -> Result<entity::trip_member::Model, DbErr> {
    TripMemberFactory::new(db, trip_id, user_id).build().await
}
