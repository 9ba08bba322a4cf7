use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(string(Trip::Name))
                    .col(text_null(Trip::Description))
                    .col(string_null(Trip::Destination))
                    .col(date_null(Trip::StartDate))
                    .col(date_null(Trip::EndDate))
                    .col(integer(Trip::CreatorId))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Trip::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_creator_id")
                            .from(Trip::Table, Trip::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    Name,
    Description,
    Destination,
    StartDate,
    EndDate,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}
