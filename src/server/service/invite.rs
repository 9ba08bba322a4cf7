//! Trip invitations by email.
//!
//! An invitation is addressed to an email. When an account with that email already
//! exists the invitation is linked to it right away; otherwise it waits for a
//! registration with the same email, which links it then.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        invite::InviteRepository, member::MemberRepository, trip::TripRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        invite::{CreateInviteParams, InviteStatus, NewInvite, TripInvite},
        trip::TripRole,
        user::User,
    },
    service::notifier::InviteNotifier,
    util::validate,
};

pub struct InviteService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a InviteNotifier,
}

impl<'a> InviteService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a InviteNotifier) -> Self {
        Self { db, notifier }
    }

    /// Invites an email address to a trip and sends the invitation email.
    ///
    /// Email delivery failures are logged and do not affect the result; the invitation
    /// stays visible to the invitee in their pending list either way.
    ///
    /// # Returns
    /// - `Ok(TripInvite)` - Created invitation
    /// - `Err(AppError::BadRequest)` - Malformed email
    /// - `Err(AppError::Conflict)` - Email belongs to a participant or already has a
    ///   pending invitation to this trip
    /// - `Err(AppError::NotFound)` - Trip not found
    pub async fn create(&self, params: CreateInviteParams) -> Result<TripInvite, AppError> {
        let email = validate::normalize_email(&params.email)?;

        let trip_repo = TripRepository::new(self.db);
        if trip_repo.find_by_id(params.trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        let invitee = UserRepository::new(self.db).find_by_email(&email).await?;
        if let Some(invitee) = &invitee {
            if trip_repo.is_participant(params.trip_id, invitee.id).await? {
                return Err(AppError::Conflict(
                    "This user is already a member of the trip".to_string(),
                ));
            }
        }

        let repo = InviteRepository::new(self.db);
        if repo.has_pending(params.trip_id, &email).await? {
            return Err(AppError::Conflict(
                "An invitation is already pending for this email".to_string(),
            ));
        }

        let invite = repo
            .create(NewInvite {
                trip_id: params.trip_id,
                inviter_id: params.inviter_id,
                invitee_id: invitee.map(|u| u.id),
                email,
            })
            .await?;

        tracing::info!(
            invite_id = invite.id,
            trip_id = invite.trip_id,
            linked = invite.invitee_id.is_some(),
            "Created trip invitation"
        );

        if let Err(err) = self.notifier.send_invite(&invite).await {
            tracing::warn!(invite_id = invite.id, "Failed to send invitation email: {}", err);
        }

        Ok(invite)
    }

    pub async fn list_for_trip(&self, trip_id: i32) -> Result<Vec<TripInvite>, AppError> {
        Ok(InviteRepository::new(self.db).get_by_trip(trip_id).await?)
    }

    /// Gets the pending invitations addressed to a user by ID or by email.
    pub async fn list_mine(&self, user: &User) -> Result<Vec<TripInvite>, AppError> {
        Ok(InviteRepository::new(self.db)
            .get_pending_for_user(user.id, &user.email)
            .await?)
    }

    /// Accepts an invitation, joining its trip.
    ///
    /// Membership and the status change are written in one transaction. A user who
    /// already participates in the trip just has the invitation marked accepted.
    ///
    /// # Returns
    /// - `Ok(TripInvite)` - Accepted invitation
    /// - `Err(AppError::NotFound)` - No invitation with this ID addressed to the user
    /// - `Err(AppError::BadRequest)` - Invitation was already answered
    pub async fn accept(&self, invite_id: i32, user: &User) -> Result<TripInvite, AppError> {
        let mut invite = self.find_answerable(invite_id, user).await?;

        let txn = self.db.begin().await?;

        if !TripRepository::new(&txn)
            .is_participant(invite.trip_id, user.id)
            .await?
        {
            MemberRepository::new(&txn)
                .add(invite.trip_id, user.id, TripRole::Member)
                .await?;
        }
        InviteRepository::new(&txn)
            .set_status(invite.id, InviteStatus::Accepted, user.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            invite_id,
            trip_id = invite.trip_id,
            user_id = user.id,
            "Invitation accepted"
        );

        invite.status = InviteStatus::Accepted;
        invite.invitee_id = Some(user.id);

        Ok(invite)
    }

    pub async fn decline(&self, invite_id: i32, user: &User) -> Result<TripInvite, AppError> {
        let mut invite = self.find_answerable(invite_id, user).await?;

        InviteRepository::new(self.db)
            .set_status(invite.id, InviteStatus::Declined, user.id)
            .await?;

        invite.status = InviteStatus::Declined;
        invite.invitee_id = Some(user.id);

        Ok(invite)
    }

    /// Withdraws a pending invitation.
    ///
    /// Allowed for the trip creator and for the member who sent the invitation.
    pub async fn revoke(
        &self,
        trip_id: i32,
        invite_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let repo = InviteRepository::new(self.db);

        let invite = repo
            .find_by_id(invite_id)
            .await?
            .filter(|invite| invite.trip_id == trip_id)
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        let trip = TripRepository::new(self.db)
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        if acting_user_id != trip.creator_id && acting_user_id != invite.inviter_id {
            return Err(AuthError::AccessDenied(
                acting_user_id,
                format!(
                    "Only the trip creator or the inviter can revoke invitation {}",
                    invite_id
                ),
            )
            .into());
        }

        if invite.status != InviteStatus::Pending {
            return Err(AppError::BadRequest(
                "Only pending invitations can be revoked".to_string(),
            ));
        }

        repo.delete(invite_id).await?;

        Ok(())
    }

    async fn find_answerable(&self, invite_id: i32, user: &User) -> Result<TripInvite, AppError> {
        let invite = InviteRepository::new(self.db)
            .find_by_id(invite_id)
            .await?
            .filter(|invite| invite.is_addressed_to(user.id, &user.email))
            .ok_or_else(|| AppError::NotFound("Invitation not found".to_string()))?;

        if invite.status != InviteStatus::Pending {
            return Err(AppError::BadRequest(
                "This invitation has already been answered".to_string(),
            ));
        }

        Ok(invite)
    }
}
