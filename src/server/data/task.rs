use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::task::{SaveTaskParams, Task};

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveTaskParams) -> Result<Task, DbErr> {
        let now = Utc::now();

        let task = entity::task::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            assignee_id: ActiveValue::Set(params.assignee_id),
            due_date: ActiveValue::Set(params.due_date),
            completed: ActiveValue::Set(params.completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(task))
    }

    pub async fn find_in_trip(&self, trip_id: i32, id: i32) -> Result<Option<Task>, DbErr> {
        let task = self.find_model(trip_id, id).await?;

        Ok(task.map(Task::from_entity))
    }

    /// Gets all tasks of a trip in creation order.
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::TripId.eq(trip_id))
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Replaces a task's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task
    /// - `Ok(None)` - No task with that ID in the trip
    pub async fn update(&self, id: i32, params: SaveTaskParams) -> Result<Option<Task>, DbErr> {
        let Some(task) = self.find_model(params.trip_id, id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::task::ActiveModel = task.into();
        active_model.title = ActiveValue::Set(params.title);
        active_model.description = ActiveValue::Set(params.description);
        active_model.assignee_id = ActiveValue::Set(params.assignee_id);
        active_model.due_date = ActiveValue::Set(params.due_date);
        active_model.completed = ActiveValue::Set(params.completed);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let task = active_model.update(self.db).await?;

        Ok(Some(Task::from_entity(task)))
    }

    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_many()
            .filter(entity::task::Column::TripId.eq(trip_id))
            .filter(entity::task::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears the assignee on tasks assigned to a user.
    ///
    /// Limited to one trip when `trip_id` is given, otherwise applies to all trips.
    pub async fn unassign_user(&self, user_id: i32, trip_id: Option<i32>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Task::update_many()
            .col_expr(
                entity::task::Column::AssigneeId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(entity::task::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::task::Column::AssigneeId.eq(user_id));

        if let Some(trip_id) = trip_id {
            query = query.filter(entity::task::Column::TripId.eq(trip_id));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    async fn find_model(
        &self,
        trip_id: i32,
        id: i32,
    ) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id)
            .filter(entity::task::Column::TripId.eq(trip_id))
            .one(self.db)
            .await
    }
}
