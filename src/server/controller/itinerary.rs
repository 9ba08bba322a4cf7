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
        itinerary::{CreateItineraryItemDto, ItineraryItemDto, UpdateItineraryItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::itinerary::SaveItineraryItemParams,
        service::itinerary::ItineraryService,
        state::AppState,
    },
};

/// Tag for grouping itinerary endpoints in OpenAPI documentation
pub static ITINERARY_TAG: &str = "itinerary";

/// Get a trip's itinerary ordered by start time.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/items",
    tag = ITINERARY_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved itinerary", body = Vec<ItineraryItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let items = ItineraryService::new(&state.db).list(trip_id).await?;

    let items_dto: Vec<_> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items_dto)))
}

/// Add an item to a trip's itinerary.
///
/// # Access Control
/// - `TripMember` - Any participant can edit the itinerary
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to add the item to
/// - `payload` - Title, kind, times and optional description and location
///
/// # Returns
/// - `201 Created` - Created itinerary item
/// - `400 Bad Request` - Empty title or end time before start time
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/items",
    tag = ITINERARY_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = CreateItineraryItemDto,
    responses(
        (status = 201, description = "Successfully created itinerary item", body = ItineraryItemDto),
        (status = 400, description = "Invalid itinerary item data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<CreateItineraryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let item = ItineraryService::new(&state.db)
        .create(SaveItineraryItemParams::from_create_dto(trip_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/items/{item_id}",
    tag = ITINERARY_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("item_id" = i32, Path, description = "Itinerary item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved itinerary item", body = ItineraryItemDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let item = ItineraryService::new(&state.db).get(trip_id, item_id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Replace an itinerary item's fields.
///
/// # Access Control
/// - `TripMember` - Any participant can edit the itinerary
///
/// # Returns
/// - `200 OK` - Updated itinerary item
/// - `400 Bad Request` - Empty title or end time before start time
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip or item not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/trips/{trip_id}/items/{item_id}",
    tag = ITINERARY_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("item_id" = i32, Path, description = "Itinerary item ID")
    ),
    request_body = UpdateItineraryItemDto,
    responses(
        (status = 200, description = "Successfully updated itinerary item", body = ItineraryItemDto),
        (status = 400, description = "Invalid itinerary item data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateItineraryItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let item = ItineraryService::new(&state.db)
        .update(
            item_id,
            SaveItineraryItemParams::from_update_dto(trip_id, payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/items/{item_id}",
    tag = ITINERARY_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("item_id" = i32, Path, description = "Itinerary item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted itinerary item"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    ItineraryService::new(&state.db)
        .delete(trip_id, item_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
