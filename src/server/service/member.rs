use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        member::MemberRepository, poll::PollRepository, task::TaskRepository,
        trip::TripRepository,
    },
    error::{auth::AuthError, AppError},
    model::member::TripMember,
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, trip_id: i32) -> Result<Vec<TripMember>, AppError> {
        Ok(MemberRepository::new(self.db).get_by_trip(trip_id).await?)
    }

    /// Removes a member from a trip, or lets a member leave.
    ///
    /// The trip creator may remove any other member; everyone else may only remove
    /// themselves. The removed user's votes in the trip's polls are deleted and tasks
    /// assigned to them in the trip become unassigned.
    ///
    /// # Arguments
    /// - `trip_id` - Trip to remove the member from
    /// - `user_id` - Member being removed
    /// - `acting_user_id` - User performing the removal
    ///
    /// # Returns
    /// - `Ok(())` - Member removed
    /// - `Err(AppError::BadRequest)` - Target is the trip creator
    /// - `Err(AppError::AuthErr(AccessDenied))` - Acting user may not remove this member
    /// - `Err(AppError::NotFound)` - Trip or membership not found
    pub async fn remove(
        &self,
        trip_id: i32,
        user_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let trip = TripRepository::new(self.db)
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if user_id == trip.creator_id {
            return Err(AppError::BadRequest(
                "The trip creator cannot be removed from the trip".to_string(),
            ));
        }

        if acting_user_id != user_id && acting_user_id != trip.creator_id {
            return Err(AuthError::AccessDenied(
                acting_user_id,
                format!(
                    "Only the creator of trip {} can remove other members",
                    trip_id
                ),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        if !MemberRepository::new(&txn).remove(trip_id, user_id).await? {
            return Err(AppError::NotFound("Member not found".to_string()));
        }
        PollRepository::new(&txn)
            .delete_votes_by_user(user_id, Some(trip_id))
            .await?;
        TaskRepository::new(&txn)
            .unassign_user(user_id, Some(trip_id))
            .await?;

        txn.commit().await?;

        tracing::info!(trip_id, user_id, acting_user_id, "Removed trip member");

        Ok(())
    }
}
