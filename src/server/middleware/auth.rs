//! Request authorization against the session user and trip participation.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{trip::TripRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{trip::Trip, user::User},
};

/// Access a handler requires on top of being logged in.
#[derive(Debug, Clone, Copy)]
pub enum Permission {
    /// Caller created the trip or is one of its members.
    TripMember(i32),
    /// Caller created the trip.
    TripCreator(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission.
    ///
    /// Permissions are checked in order and the first failure is returned. An empty list
    /// only requires a logged-in user.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must hold
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user holding every permission
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AppError::NotFound)` - Referenced trip does not exist
    /// - `Err(AuthError::AccessDenied)` - A permission is not held
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let trip_repo = TripRepository::new(self.db);

        for permission in permissions {
            match *permission {
                Permission::TripMember(trip_id) => {
                    self.find_trip(&trip_repo, trip_id).await?;

                    if !trip_repo.is_participant(trip_id, user.id).await? {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not a member of trip {}", trip_id),
                        )
                        .into());
                    }
                }
                Permission::TripCreator(trip_id) => {
                    let trip = self.find_trip(&trip_repo, trip_id).await?;

                    if trip.creator_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not the creator of trip {}", trip_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    async fn find_trip(
        &self,
        repo: &TripRepository<'_, DatabaseConnection>,
        trip_id: i32,
    ) -> Result<Trip, AppError> {
        repo.find_by_id(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
    }
}
