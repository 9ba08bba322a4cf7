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
                    .table(Cost::Table)
                    .if_not_exists()
                    .col(pk_auto(Cost::Id))
                    .col(integer(Cost::TripId))
                    .col(string(Cost::Description))
                    .col(big_integer(Cost::AmountCents))
                    .col(string_len(Cost::Currency, 3))
                    .col(string_null(Cost::Category))
                    .col(integer(Cost::PaidById))
                    .col(date(Cost::IncurredOn))
                    .col(
                        timestamp_with_time_zone(Cost::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Cost::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_trip_id")
                            .from(Cost::Table, Cost::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_paid_by_id")
                            .from(Cost::Table, Cost::PaidById)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cost {
    Table,
    Id,
    TripId,
    Description,
    AmountCents,
    Currency,
    Category,
    PaidById,
    IncurredOn,
    CreatedAt,
    UpdatedAt,
}
