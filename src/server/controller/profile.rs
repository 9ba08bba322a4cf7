use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ChangePasswordDto, DeleteAccountDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{ChangePasswordParams, UpdateProfileParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping profile and account settings endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the logged in user's profile.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db).get_profile(user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the logged in user's display name and avatar.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - New name and optional image URL
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Empty name or malformed image URL
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .update_profile(UpdateProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Change the logged in user's password.
///
/// # Returns
/// - `204 No Content` - Password changed
/// - `400 Bad Request` - Wrong current password or too short new password
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/settings/password",
    tag = PROFILE_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Invalid password data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .change_password(ChangePasswordParams::from_dto(user.id, payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete the logged in user's account.
///
/// Removes the user with every trip they created and their contributions to other
/// trips, then ends the session.
///
/// # Access Control
/// Requires a logged in session and the account password
///
/// # Returns
/// - `204 No Content` - Account deleted, session ended
/// - `400 Bad Request` - Wrong password
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    delete,
    path = "/api/settings/account",
    tag = PROFILE_TAG,
    request_body = DeleteAccountDto,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Wrong password", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeleteAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    UserService::new(&state.db)
        .delete_account(user.id, payload.password)
        .await?;

    AuthSession::new(&session).logout().await?;

    Ok(StatusCode::NO_CONTENT)
}
