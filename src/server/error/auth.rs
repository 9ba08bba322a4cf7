use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request did not come from a logged-in session. Results in 401 Unauthorized.
    #[error("No user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens after an account is deleted while another session for it is still alive.
    /// Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one message so the response does not reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already has an account.
    #[error("Email is already registered")]
    EmailTaken,

    /// User is authenticated but lacks the permission for the requested resource.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Reason, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - Missing session, stale session or bad credentials
/// - 403 Forbidden - Authenticated user lacks access
/// - 409 Conflict - Email already registered
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::EmailTaken => (StatusCode::CONFLICT, "Email is already registered"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have access to this resource",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
