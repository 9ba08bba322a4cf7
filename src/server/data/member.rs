use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{member::TripMember, trip::TripRole};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a trip. Fails on the unique (trip, user) index if already a member.
    pub async fn add(&self, trip_id: i32, user_id: i32, role: TripRole) -> Result<(), DbErr> {
        entity::trip_member::ActiveModel {
            trip_id: ActiveValue::Set(trip_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn find_role(&self, trip_id: i32, user_id: i32) -> Result<Option<TripRole>, DbErr> {
        let member = entity::prelude::TripMember::find()
            .filter(entity::trip_member::Column::TripId.eq(trip_id))
            .filter(entity::trip_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        member.map(|m| TripRole::parse(&m.role)).transpose()
    }

    /// Gets all members of a trip with their profiles, in join order.
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<TripMember>, DbErr> {
        let rows = entity::prelude::TripMember::find()
            .filter(entity::trip_member::Column::TripId.eq(trip_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::trip_member::Column::JoinedAt)
            .order_by_asc(entity::trip_member::Column::Id)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(member, user)| user.map(|user| (member, user)))
            .map(|(member, user)| TripMember::from_entity(member, user))
            .collect()
    }

    /// Removes a membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - User was not a member
    pub async fn remove(&self, trip_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TripMember::delete_many()
            .filter(entity::trip_member::Column::TripId.eq(trip_id))
            .filter(entity::trip_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every membership of a user across all trips.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TripMember::delete_many()
            .filter(entity::trip_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
