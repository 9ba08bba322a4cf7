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
        poll::{CastVoteDto, CreatePollDto, PollDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::poll::{CastVoteParams, CreatePollParams},
        service::poll::PollService,
        state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "poll";

/// Get a trip's polls with their tallies, newest first.
///
/// Each poll carries its current status and the caller's own vote.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/polls",
    tag = POLL_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved polls", body = Vec<PollDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_polls(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let polls = PollService::new(&state.db).list(trip_id).await?;

    let polls_dto: Vec<_> = polls.into_iter().map(|p| p.into_dto(user.id)).collect();

    Ok((StatusCode::OK, Json(polls_dto)))
}

/// Create a poll.
///
/// # Access Control
/// - `TripMember` - Any participant can create polls
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip the poll belongs to
/// - `payload` - Question, option labels and optional expiry
///
/// # Returns
/// - `201 Created` - Created poll
/// - `400 Bad Request` - Empty question, fewer than two distinct options or expiry in the past
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/polls",
    tag = POLL_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = CreatePollDto,
    responses(
        (status = 201, description = "Successfully created poll", body = PollDto),
        (status = 400, description = "Invalid poll data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<CreatePollDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let poll = PollService::new(&state.db)
        .create(CreatePollParams::from_dto(trip_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(poll.into_dto(user.id))))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/polls/{poll_id}",
    tag = POLL_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved poll", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, poll_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let poll = PollService::new(&state.db).get(trip_id, poll_id).await?;

    Ok((StatusCode::OK, Json(poll.into_dto(user.id))))
}

/// Delete a poll with its votes.
///
/// # Access Control
/// - `TripMember` - Caller must participate in the trip
/// - The service additionally requires the poll creator or the trip creator
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/polls/{poll_id}",
    tag = POLL_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted poll"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this poll", body = ErrorDto),
        (status = 404, description = "Trip or poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_poll(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, poll_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    PollService::new(&state.db)
        .delete(trip_id, poll_id, user.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Vote on a poll, replacing any earlier vote by the caller.
///
/// # Access Control
/// - `TripMember` - Any participant can vote
///
/// # Returns
/// - `200 OK` - Poll with updated tallies
/// - `400 Bad Request` - Poll closed or expired, or option not in this poll
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip or poll not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/polls/{poll_id}/vote",
    tag = POLL_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    request_body = CastVoteDto,
    responses(
        (status = 200, description = "Successfully voted", body = PollDto),
        (status = 400, description = "Poll not active or invalid option", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, poll_id)): Path<(i32, i32)>,
    Json(payload): Json<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let param = CastVoteParams {
        trip_id,
        poll_id,
        user_id: user.id,
        option_id: payload.option_id,
    };
    let poll = PollService::new(&state.db).vote(param).await?;

    Ok((StatusCode::OK, Json(poll.into_dto(user.id))))
}

/// Withdraw the caller's vote from an active poll.
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/polls/{poll_id}/vote",
    tag = POLL_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully retracted vote", body = PollDto),
        (status = 400, description = "Poll not active", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip, poll or vote not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn retract_vote(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, poll_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let poll = PollService::new(&state.db)
        .retract_vote(trip_id, poll_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto(user.id))))
}

/// Close a poll so it accepts no more votes.
///
/// # Access Control
/// - `TripMember` - Caller must participate in the trip
/// - The service additionally requires the poll creator
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/polls/{poll_id}/close",
    tag = POLL_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("poll_id" = i32, Path, description = "Poll ID")
    ),
    responses(
        (status = 200, description = "Successfully closed poll", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the poll creator", body = ErrorDto),
        (status = 404, description = "Trip or poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn close_poll(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, poll_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let poll = PollService::new(&state.db)
        .close(trip_id, poll_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto(user.id))))
}
