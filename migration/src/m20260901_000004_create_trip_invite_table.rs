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
                    .table(TripInvite::Table)
                    .if_not_exists()
                    .col(pk_auto(TripInvite::Id))
                    .col(integer(TripInvite::TripId))
                    .col(integer(TripInvite::InviterId))
                    .col(integer_null(TripInvite::InviteeId))
                    .col(string(TripInvite::Email))
                    .col(string(TripInvite::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(TripInvite::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(TripInvite::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_invite_trip_id")
                            .from(TripInvite::Table, TripInvite::TripId)
                            .to(Trip::Table, Trip::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_invite_inviter_id")
                            .from(TripInvite::Table, TripInvite::InviterId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_invite_invitee_id")
                            .from(TripInvite::Table, TripInvite::InviteeId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_invite_email")
                    .table(TripInvite::Table)
                    .col(TripInvite::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripInvite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TripInvite {
    Table,
    Id,
    TripId,
    InviterId,
    InviteeId,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}
