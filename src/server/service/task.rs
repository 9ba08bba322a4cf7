use sea_orm::DatabaseConnection;

use crate::server::{
    data::{task::TaskRepository, trip::TripRepository},
    error::AppError,
    model::task::{SaveTaskParams, Task},
    service::trip::MAX_DESCRIPTION_LEN,
    util::validate,
};

const MAX_TITLE_LEN: usize = 200;

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveTaskParams) -> Result<Task, AppError> {
        let params = self.validate(params).await?;

        Ok(TaskRepository::new(self.db).create(params).await?)
    }

    /// Gets the trip's tasks: open tasks first, then by due date (undated last), then ID.
    pub async fn list(&self, trip_id: i32) -> Result<Vec<Task>, AppError> {
        let mut tasks = TaskRepository::new(self.db).get_by_trip(trip_id).await?;

        tasks.sort_by_key(|task| (task.completed, task.due_date.is_none(), task.due_date, task.id));

        Ok(tasks)
    }

    /// Replaces a task's fields, including its completion flag.
    pub async fn update(&self, id: i32, params: SaveTaskParams) -> Result<Task, AppError> {
        let params = self.validate(params).await?;

        TaskRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<(), AppError> {
        if !TaskRepository::new(self.db).delete(trip_id, id).await? {
            return Err(not_found());
        }
        Ok(())
    }

    async fn validate(&self, params: SaveTaskParams) -> Result<SaveTaskParams, AppError> {
        if let Some(assignee_id) = params.assignee_id {
            let is_participant = TripRepository::new(self.db)
                .is_participant(params.trip_id, assignee_id)
                .await?;

            if !is_participant {
                return Err(AppError::BadRequest(
                    "Tasks can only be assigned to trip members".to_string(),
                ));
            }
        }

        Ok(SaveTaskParams {
            trip_id: params.trip_id,
            title: validate::required_text("Title", &params.title, MAX_TITLE_LEN)?,
            description: validate::optional_text(
                "Description",
                params.description,
                MAX_DESCRIPTION_LEN,
            )?,
            assignee_id: params.assignee_id,
            due_date: params.due_date,
            completed: params.completed,
        })
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Task not found".to_string())
}
