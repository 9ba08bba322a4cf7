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
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(integer(Poll::TripId))
                    .col(integer(Poll::CreatorId))
                    .col(string(Poll::Question))
                    .col(boolean(Poll::Closed).default(false))
                    .col(timestamp_with_time_zone_null(Poll::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(Poll::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_trip_id")
                            .from(Poll::Table, Poll::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_creator_id")
                            .from(Poll::Table, Poll::CreatorId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    Table,
    Id,
    TripId,
    CreatorId,
    Question,
    Closed,
    ExpiresAt,
    CreatedAt,
}
