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
        cost::{CostDto, CreateCostDto, TripBalancesDto, UpdateCostDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::cost::CostInput,
        service::cost::CostService,
        state::AppState,
    },
};

/// Tag for grouping cost and balance endpoints in OpenAPI documentation
pub static COST_TAG: &str = "cost";

/// Get a trip's costs, most recent first.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/costs",
    tag = COST_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved costs", body = Vec<CostDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_costs(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let costs = CostService::new(&state.db).list(trip_id).await?;

    let costs_dto: Vec<_> = costs.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(costs_dto)))
}

/// Record a cost paid by a trip participant.
///
/// Without explicit shares the amount is split equally between all participants,
/// with leftover cents going to the lowest user IDs. Explicit shares must add up to
/// the amount exactly.
///
/// # Access Control
/// - `TripMember` - Any participant can record costs
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip the cost belongs to
/// - `payload` - Amount in cents, description and optional payer, currency, date and shares
///
/// # Returns
/// - `201 Created` - Created cost with its shares
/// - `400 Bad Request` - Non-positive amount, bad currency, payer or share outside the
///   trip, or shares that do not add up to the amount
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/costs",
    tag = COST_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = CreateCostDto,
    responses(
        (status = 201, description = "Successfully created cost", body = CostDto),
        (status = 400, description = "Invalid cost data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cost(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<CreateCostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let cost = CostService::new(&state.db)
        .create(CostInput::from_create_dto(trip_id, user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(cost.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/costs/{cost_id}",
    tag = COST_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("cost_id" = i32, Path, description = "Cost ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cost", body = CostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or cost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cost(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, cost_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let cost = CostService::new(&state.db).get(trip_id, cost_id).await?;

    Ok((StatusCode::OK, Json(cost.into_dto())))
}

/// Replace a cost and its shares.
///
/// Omitting `shares` splits the new amount equally between the current participants.
#[utoipa::path(
    put,
    path = "/api/trips/{trip_id}/costs/{cost_id}",
    tag = COST_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("cost_id" = i32, Path, description = "Cost ID")
    ),
    request_body = UpdateCostDto,
    responses(
        (status = 200, description = "Successfully updated cost", body = CostDto),
        (status = 400, description = "Invalid cost data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or cost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cost(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, cost_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateCostDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let cost = CostService::new(&state.db)
        .update(
            cost_id,
            CostInput::from_update_dto(trip_id, user.id, payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(cost.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/costs/{cost_id}",
    tag = COST_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("cost_id" = i32, Path, description = "Cost ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted cost"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or cost not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cost(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, cost_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    CostService::new(&state.db).delete(trip_id, cost_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get who owes whom in a trip.
///
/// Balances are computed per currency from all recorded costs, along with a list of
/// transfers that settles every balance.
///
/// # Access Control
/// - `TripMember` - Any participant can view balances
///
/// # Returns
/// - `200 OK` - Per-currency balances and settlements
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/balances",
    tag = COST_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully computed balances", body = TripBalancesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balances(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let balances = CostService::new(&state.db).balances(trip_id).await?;

    Ok((StatusCode::OK, Json(balances.into_dto())))
}
