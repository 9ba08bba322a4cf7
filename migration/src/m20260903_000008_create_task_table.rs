use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260901_000001_create_user_table::User, m20260901_000002_create_trip_table::Trip};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(integer(Task::TripId))
                    .col(string(Task::Title))
                    .col(text_null(Task::Description))
                    .col(integer_null(Task::AssigneeId))
                    .col(date_null(Task::DueDate))
                    .col(boolean(Task::Completed).default(false))
                    .col(
                        timestamp_with_time_zone(Task::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Task::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_trip_id")
                            .from(Task::Table, Task::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignee_id")
                            .from(Task::Table, Task::AssigneeId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    TripId,
    Title,
    Description,
    AssigneeId,
    DueDate,
    Completed,
    CreatedAt,
    UpdatedAt,
}
