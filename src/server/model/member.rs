use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{model::member::TripMemberDto, server::model::trip::TripRole};

/// Trip membership joined with the member's user profile.
#[derive(Debug, Clone, PartialEq)]
pub struct TripMember {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub role: TripRole,
    pub joined_at: DateTime<Utc>,
}

impl TripMember {
    /// # Returns
    /// - `Ok(TripMember)` - Converted membership
    /// - `Err(DbErr::Custom)` - Stored role is not a known value
    pub fn from_entity(
        member: entity::trip_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            user_id: member.user_id,
            name: user.name,
            email: user.email,
            image: user.image,
            role: TripRole::parse(&member.role)?,
            joined_at: member.joined_at,
        })
    }

    pub fn into_dto(self) -> TripMemberDto {
        TripMemberDto {
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            image: self.image,
            role: self.role.into_dto(),
            joined_at: self.joined_at,
        }
    }
}
