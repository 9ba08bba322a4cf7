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
        task::{CreateTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::task::SaveTaskParams,
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Get a trip's tasks.
///
/// Open tasks come first, ordered by due date with undated tasks last.
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/tasks",
    tag = TASK_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "Successfully retrieved tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let tasks = TaskService::new(&state.db).list(trip_id).await?;

    let tasks_dto: Vec<_> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tasks_dto)))
}

/// Add a task to a trip's checklist.
///
/// # Access Control
/// - `TripMember` - Any participant can manage tasks
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to add the task to
/// - `payload` - Title with optional description, assignee and due date
///
/// # Returns
/// - `201 Created` - Created task
/// - `400 Bad Request` - Empty title or assignee outside the trip
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a participant of the trip
/// - `404 Not Found` - Trip not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/tasks",
    tag = TASK_TAG,
    params(("trip_id" = i32, Path, description = "Trip ID")),
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Successfully created task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<i32>,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let task = TaskService::new(&state.db)
        .create(SaveTaskParams::from_create_dto(trip_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Replace a task's fields, including whether it is completed.
#[utoipa::path(
    put,
    path = "/api/trips/{trip_id}/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Successfully updated task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, task_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    let task = TaskService::new(&state.db)
        .update(task_id, SaveTaskParams::from_update_dto(trip_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted task"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a participant of the trip", body = ErrorDto),
        (status = 404, description = "Trip or task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, task_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripMember(trip_id)])
        .await?;

    TaskService::new(&state.db).delete(trip_id, task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
