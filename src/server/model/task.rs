use chrono::{DateTime, NaiveDate, Utc};

use crate::model::task::{CreateTaskDto, TaskDto, UpdateTaskDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub trip_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            title: entity.title,
            description: entity.description,
            assignee_id: entity.assignee_id,
            due_date: entity.due_date,
            completed: entity.completed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            trip_id: self.trip_id,
            title: self.title,
            description: self.description,
            assignee_id: self.assignee_id,
            due_date: self.due_date,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Task fields for create and full replacement on update.
#[derive(Debug, Clone)]
pub struct SaveTaskParams {
    pub trip_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub assignee_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

impl SaveTaskParams {
    pub fn from_create_dto(trip_id: i32, dto: CreateTaskDto) -> Self {
        Self {
            trip_id,
            title: dto.title,
            description: dto.description,
            assignee_id: dto.assignee_id,
            due_date: dto.due_date,
            completed: false,
        }
    }

    pub fn from_update_dto(trip_id: i32, dto: UpdateTaskDto) -> Self {
        Self {
            trip_id,
            title: dto.title,
            description: dto.description,
            assignee_id: dto.assignee_id,
            due_date: dto.due_date,
            completed: dto.completed,
        }
    }
}
