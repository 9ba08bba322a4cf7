use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        trip::{CreateTripDto, PaginatedTripsDto, TripDto, UpdateTripDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trip::{CreateTripParams, UpdateTripParams},
        service::trip::TripService,
        state::AppState,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

/// Get the trips the logged in user created or joined.
///
/// Trips are ordered newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `params` - Pagination parameters (page and per_page)
///
/// # Returns
/// - `200 OK` - Page of trips with the user's role in each
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Trips per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trips", body = PaginatedTripsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let trips = TripService::new(&state.db)
        .list_for_user(user.id, params.page, params.per_page)
        .await?;

    Ok((StatusCode::OK, Json(trips.into_dto())))
}

/// Create a trip owned by the logged in user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Trip name, optional description, destination and dates
///
/// # Returns
/// - `201 Created` - Created trip with the creator as owner
/// - `400 Bad Request` - Empty name or end date before start date
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Successfully created trip", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let trip = TripService::new(&state.db)
        .create(CreateTripParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

/// Get a single trip.
///
/// # Access Control
/// - `TripMember` - Creator or member of the trip
///
/// # Returns
/// - `200 OK` - Trip with member count and the user's role
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved trip", body = TripDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let trip = TripService::new(&state.db).get(trip_id, user.id).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Update a trip's details.
///
/// # Access Control
/// - `TripCreator` - Only the trip creator can edit the trip
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - ID of the trip to update
/// - `payload` - Replacement trip details
///
/// # Returns
/// - `200 OK` - Updated trip
/// - `400 Bad Request` - Empty name or end date before start date
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the trip creator
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = UpdateTripDto,
    responses(
        (status = 200, description = "Successfully updated trip", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the trip creator", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<UpdateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripCreator(trip_id)])
        .await?;

    let trip = TripService::new(&state.db)
        .update(UpdateTripParams::from_dto(trip_id, payload), user.id)
        .await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Delete a trip with all of its content.
///
/// # Access Control
/// - `TripCreator` - Only the trip creator can delete the trip
///
/// # Returns
/// - `204 No Content` - Trip deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not the trip creator
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 204, description = "Successfully deleted trip"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the trip creator", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripCreator(trip_id)])
        .await?;

    TripService::new(&state.db).delete(trip_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
