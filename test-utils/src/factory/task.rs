//! Task factory.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating trip tasks. Defaults to an unassigned, open task.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    title: String,
    assignee_id: Option<i32>,
    due_date: Option<NaiveDate>,
    completed: bool,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            trip_id,
            title: format!("Task {}", id),
            assignee_id: None,
            due_date: None,
            completed: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn assignee(mut self, assignee_id: Option<i32>) -> Self {
        self.assignee_id = assignee_id;
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            assignee_id: ActiveValue::Set(self.assignee_id),
            due_date: ActiveValue::Set(self.due_date),
            completed: ActiveValue::Set(self.completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_task(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, trip_id).build().await
}
