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
                    .table(TripMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TripMember::Id))
                    .col(integer(TripMember::TripId))
                    .col(integer(TripMember::UserId))
                    .col(string(TripMember::Role).default("member"))
                    .col(
                        timestamp_with_time_zone(TripMember::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_member_trip_id")
                            .from(TripMember::Table, TripMember::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_member_user_id")
                            .from(TripMember::Table, TripMember::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One membership per trip and user
        manager
            .create_index(
                Index::create()
                    .name("idx_trip_member_trip_user")
                    .table(TripMember::Table)
                    .col(TripMember::TripId)
                    .col(TripMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripMember {
    Table,
    Id,
    TripId,
    UserId,
    Role,
    JoinedAt,
}
