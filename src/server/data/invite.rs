use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::invite::{InviteStatus, NewInvite, TripInvite};

pub struct InviteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InviteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending invitation.
    pub async fn create(&self, params: NewInvite) -> Result<TripInvite, DbErr> {
        let now = Utc::now();

        let invite = entity::trip_invite::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            inviter_id: ActiveValue::Set(params.inviter_id),
            invitee_id: ActiveValue::Set(params.invitee_id),
            email: ActiveValue::Set(params.email),
            status: ActiveValue::Set(InviteStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(self.enrich(vec![invite]).await?.remove(0))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TripInvite>, DbErr> {
        let Some(invite) = entity::prelude::TripInvite::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.enrich(vec![invite]).await?.pop())
    }

    /// Whether a pending invitation already exists for this email in the trip.
    pub async fn has_pending(&self, trip_id: i32, email: &str) -> Result<bool, DbErr> {
        let invite = entity::prelude::TripInvite::find()
            .filter(entity::trip_invite::Column::TripId.eq(trip_id))
            .filter(entity::trip_invite::Column::Email.eq(email))
            .filter(entity::trip_invite::Column::Status.eq(InviteStatus::Pending.as_str()))
            .one(self.db)
            .await?;

        Ok(invite.is_some())
    }

    /// Gets all invitations of a trip, newest first.
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<TripInvite>, DbErr> {
        let invites = entity::prelude::TripInvite::find()
            .filter(entity::trip_invite::Column::TripId.eq(trip_id))
            .order_by_desc(entity::trip_invite::Column::CreatedAt)
            .order_by_desc(entity::trip_invite::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(invites).await
    }

    /// Gets pending invitations addressed to a user.
    ///
    /// Matches on the linked invitee ID, or on the email for invites that have not been
    /// linked to an account yet.
    pub async fn get_pending_for_user(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<Vec<TripInvite>, DbErr> {
        let invites = entity::prelude::TripInvite::find()
            .filter(entity::trip_invite::Column::Status.eq(InviteStatus::Pending.as_str()))
            .filter(
                Condition::any()
                    .add(entity::trip_invite::Column::InviteeId.eq(user_id))
                    .add(
                        Condition::all()
                            .add(entity::trip_invite::Column::InviteeId.is_null())
                            .add(entity::trip_invite::Column::Email.eq(email)),
                    ),
            )
            .order_by_desc(entity::trip_invite::Column::CreatedAt)
            .order_by_desc(entity::trip_invite::Column::Id)
            .all(self.db)
            .await?;

        self.enrich(invites).await
    }

    /// Records an answer to an invitation and links it to the answering user.
    pub async fn set_status(
        &self,
        id: i32,
        status: InviteStatus,
        invitee_id: i32,
    ) -> Result<(), DbErr> {
        entity::trip_invite::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            invitee_id: ActiveValue::Set(Some(invitee_id)),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Links unlinked pending invitations for an email to a newly registered user.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of invitations linked
    pub async fn link_invitee(&self, email: &str, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TripInvite::update_many()
            .col_expr(entity::trip_invite::Column::InviteeId, Expr::value(user_id))
            .col_expr(entity::trip_invite::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::trip_invite::Column::Email.eq(email))
            .filter(entity::trip_invite::Column::InviteeId.is_null())
            .filter(entity::trip_invite::Column::Status.eq(InviteStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TripInvite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every invitation a user sent or received.
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TripInvite::delete_many()
            .filter(
                Condition::any()
                    .add(entity::trip_invite::Column::InviterId.eq(user_id))
                    .add(entity::trip_invite::Column::InviteeId.eq(user_id)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Converts invite rows, looking up trip and inviter names in one query each.
    async fn enrich(
        &self,
        invites: Vec<entity::trip_invite::Model>,
    ) -> Result<Vec<TripInvite>, DbErr> {
        if invites.is_empty() {
            return Ok(Vec::new());
        }

        let trip_ids: Vec<i32> = invites.iter().map(|i| i.trip_id).collect();
        let trips: HashMap<i32, entity::trip::Model> = entity::prelude::Trip::find()
            .filter(entity::trip::Column::Id.is_in(trip_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let inviter_ids: Vec<i32> = invites.iter().map(|i| i.inviter_id).collect();
        let inviters: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(inviter_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        invites
            .into_iter()
            .map(|invite| {
                let trip = trips.get(&invite.trip_id);
                let inviter = inviters.get(&invite.inviter_id);
                TripInvite::from_entity(invite, trip, inviter)
            })
            .collect()
    }
}
