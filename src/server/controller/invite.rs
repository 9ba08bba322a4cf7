use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        invite::{CreateInviteDto, TripInviteDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::invite::CreateInviteParams,
        service::invite::InviteService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITE_TAG: &str = "invite";

/// Get all invitations sent for a trip, newest first.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/invites",
    tag = INVITE_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved invitations", body = Vec<TripInviteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_invites(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let invites = InviteService::new(&state.db, &state.notifier)
        .list_for_trip(trip_id)
        .await?;

    let invites_dto: Vec<_> = invites.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(invites_dto)))
}

/// Invite someone to a trip by email.
///
/// The invitation is linked to an existing account with that email, or waits for
/// one to register. An invitation email is sent when a provider is configured;
/// delivery failures do not fail the request.
///
/// # Access Control
/// - `TripMember` - Any participant can invite
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to invite to
/// - `payload` - Email address to invite
///
/// # Returns
/// - `201 Created` - Invitation created
/// - `400 Bad Request` - Malformed email
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `409 Conflict` - Email belongs to a participant or already has a pending invitation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/invites",
    tag = INVITE_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = CreateInviteDto,
    responses(
        (status = 201, description = "Successfully created invitation", body = TripInviteDto),
        (status = 400, description = "Invalid email", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Already a member or already invited", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invite(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<CreateInviteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let param = CreateInviteParams {
        trip_id,
        inviter_id: user.id,
        email: payload.email,
    };
    let invite = InviteService::new(&state.db, &state.notifier)
        .create(param)
        .await?;

    Ok((StatusCode::CREATED, Json(invite.into_dto())))
}

/// Revoke a pending invitation.
///
/// # Access Control
/// - `TripMember` - Caller must participate in the trip
/// - The service additionally requires the caller to be the trip creator or the inviter
///
/// # Returns
/// - `204 No Content` - Invitation revoked
/// - `400 Bad Request` - Invitation was already answered
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller may not revoke this invitation
/// - `404 Not Found` - Trip or invitation not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/invites/{invite_id}",
    tag = INVITE_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("invite_id" = i32, Path, description = "Invitation ID")
    ),
    responses(
        (status = 204, description = "Successfully revoked invitation"),
        (status = 400, description = "Invitation already answered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to revoke this invitation", body = ErrorDto),
        (status = 404, description = "Trip or invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_invite(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, invite_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    InviteService::new(&state.db, &state.notifier)
        .revoke(trip_id, invite_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged in user's pending invitations.
///
/// Includes invitations linked to the account and those addressed to its email.
#[utoipa::path(
    get,
    path = "/api/invites",
    tag = INVITE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pending invitations", body = Vec<TripInviteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_invites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invites = InviteService::new(&state.db, &state.notifier)
        .list_mine(&user)
        .await?;

    let invites_dto: Vec<_> = invites.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(invites_dto)))
}

/// Accept an invitation and join its trip.
///
/// # Access Control
/// Only the invitee, matched by account or by email
///
/// # Returns
/// - `200 OK` - Invitation accepted, user is now a member
/// - `400 Bad Request` - Invitation was already answered
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such invitation addressed to the user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/invites/{invite_id}/accept",
    tag = INVITE_TAG,
    params(("invite_id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Successfully accepted invitation", body = TripInviteDto),
        (status = 400, description = "Invitation already answered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invite = InviteService::new(&state.db, &state.notifier)
        .accept(invite_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(invite.into_dto())))
}

/// Decline an invitation.
#[utoipa::path(
    post,
    path = "/api/invites/{invite_id}/decline",
    tag = INVITE_TAG,
    params(("invite_id" = i32, Path, description = "Invitation ID")),
    responses(
        (status = 200, description = "Successfully declined invitation", body = TripInviteDto),
        (status = 400, description = "Invitation already answered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Invitation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decline_invite(
    State(state): State<AppState>,
    session: Session,
    Path(invite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invite = InviteService::new(&state.db, &state.notifier)
        .decline(invite_id, &user)
        .await?;

    Ok((StatusCode::OK, Json(invite.into_dto())))
}
