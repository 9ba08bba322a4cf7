//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the operations the
//! login flow needs, so session keys and value types live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles the logged-in user's ID and the session lifecycle around login and logout.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. for `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Starts an authenticated session for a user.
    ///
    /// The session ID is cycled before the user ID is stored so a session ID issued
    /// before login cannot be reused afterwards.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user who just logged in or registered
    ///
    /// # Returns
    /// - `Ok(())` - Session now belongs to the user
    /// - `Err(AppError::SessionErr(_))` - Failed to update the session
    pub async fn login(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.set_user_id(user_id).await
    }

    /// Stores the user's ID in the session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Deletes the session and its stored data.
    ///
    /// Used on logout and after account deletion.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
