use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, member::TripMemberDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping trip member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Get the participants of a trip, creator first.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/members",
    tag = MEMBER_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<TripMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let members = MemberService::new(&state.db).list(trip_id).await?;

    let members_dto: Vec<_> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members_dto)))
}

/// Remove a member from a trip.
///
/// The trip creator can remove any member; a member can remove only themselves,
/// which is how a trip is left. The creator cannot be removed.
///
/// # Access Control
/// - `TripMember` - Caller must participate in the trip
/// - The service additionally requires the caller to be the creator or the target
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to remove the member from
/// - `user_id` - User to remove
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `400 Bad Request` - Target is the trip creator
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller may not remove this member
/// - `404 Not Found` - Trip not found or user is not a member
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("user_id" = i32, Path, description = "ID of the member to remove")
    ),
    responses(
        (status = 204, description = "Successfully removed member"),
        (status = 400, description = "The trip creator cannot be removed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Trip or member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    MemberService::new(&state.db)
        .remove(trip_id, user_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
