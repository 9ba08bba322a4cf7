use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_trip_table::Trip;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItineraryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ItineraryItem::Id))
                    .col(integer(ItineraryItem::TripId))
                    .col(string(ItineraryItem::Title))
                    .col(text_null(ItineraryItem::Description))
                    .col(string_null(ItineraryItem::Location))
                    .col(string(ItineraryItem::Kind).default("activity"))
                    .col(timestamp_with_time_zone(ItineraryItem::StartTime))
                    .col(timestamp_with_time_zone_null(ItineraryItem::EndTime))
                    .col(
                        timestamp_with_time_zone(ItineraryItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ItineraryItem::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_itinerary_item_trip_id")
                            .from(ItineraryItem::Table, ItineraryItem::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItineraryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItineraryItem {
    Table,
    Id,
    TripId,
    Title,
    Description,
    Location,
    Kind,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}
