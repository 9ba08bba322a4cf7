//! Profile and account settings.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        cost::CostRepository, invite::InviteRepository, member::MemberRepository,
        poll::PollRepository, task::TaskRepository, trip::TripRepository, user::UserRepository,
    },
    error::AppError,
    model::user::{ChangePasswordParams, UpdateProfileParams, User, UserCredentials},
    service::auth::MAX_NAME_LEN,
    util::{password, validate},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Replaces the display name and avatar URL.
    pub async fn update_profile(&self, params: UpdateProfileParams) -> Result<User, AppError> {
        let params = UpdateProfileParams {
            user_id: params.user_id,
            name: validate::required_text("Name", &params.name, MAX_NAME_LEN)?,
            image: validate::image_url(params.image)?,
        };

        UserRepository::new(self.db)
            .update_profile(params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Sets a new password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Current password wrong or new password too short
    /// - `Err(AppError::NotFound)` - User no longer exists
    pub async fn change_password(&self, params: ChangePasswordParams) -> Result<(), AppError> {
        validate::password("New password", &params.new_password)?;

        let credentials = self.credentials(params.user_id).await?;
        self.check_password(&credentials, params.current_password, "Current password is incorrect")
            .await?;

        let hashed = password::hash_password_blocking(params.new_password).await?;

        UserRepository::new(self.db)
            .update_password(params.user_id, hashed.hash, hashed.salt)
            .await?;

        tracing::info!(user_id = params.user_id, "Password changed");

        Ok(())
    }

    /// Deletes an account and everything it owns in one transaction.
    ///
    /// Trips the user created are deleted with all of their contents. In trips created by
    /// others, the user's votes, polls, costs and cost shares, memberships and invitations
    /// are removed, and tasks assigned to them become unassigned.
    ///
    /// Removing the user's shares from other members' costs leaves those costs with shares
    /// summing to less than the amount; balances then treat the difference as owed by nobody.
    ///
    /// # Arguments
    /// - `user_id` - Account to delete
    /// - `password` - Plaintext password confirming the deletion
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Password incorrect
    /// - `Err(AppError::NotFound)` - User no longer exists
    /// - `Err(AppError::DbErr)` - Database error; nothing is deleted
    pub async fn delete_account(&self, user_id: i32, password: String) -> Result<(), AppError> {
        let credentials = self.credentials(user_id).await?;
        self.check_password(&credentials, password, "Password is incorrect")
            .await?;

        let txn = self.db.begin().await?;

        let trip_repo = TripRepository::new(&txn);
        let created_trips = trip_repo.find_ids_created_by(user_id).await?;
        for trip_id in &created_trips {
            trip_repo.delete_with_contents(*trip_id).await?;
        }

        let poll_repo = PollRepository::new(&txn);
        poll_repo.delete_votes_by_user(user_id, None).await?;
        let polls = poll_repo.find_ids_created_by(user_id).await?;
        poll_repo.delete_by_ids(polls).await?;

        let cost_repo = CostRepository::new(&txn);
        let costs = cost_repo.find_ids_paid_by(user_id).await?;
        cost_repo.delete_by_ids(costs).await?;
        cost_repo.delete_shares_by_user(user_id).await?;

        TaskRepository::new(&txn)
            .unassign_user(user_id, None)
            .await?;
        MemberRepository::new(&txn).delete_by_user(user_id).await?;
        InviteRepository::new(&txn).delete_by_user(user_id).await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(
            user_id,
            deleted_trips = created_trips.len(),
            "Deleted user account"
        );

        Ok(())
    }

    async fn credentials(&self, user_id: i32) -> Result<UserCredentials, AppError> {
        UserRepository::new(self.db)
            .find_credentials_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn check_password(
        &self,
        credentials: &UserCredentials,
        password: String,
        message: &str,
    ) -> Result<(), AppError> {
        let valid = password::verify_password_blocking(
            password,
            credentials.password_hash.clone(),
            credentials.password_salt.clone(),
        )
        .await?;

        if !valid {
            return Err(AppError::BadRequest(message.to_string()));
        }

        Ok(())
    }
}
