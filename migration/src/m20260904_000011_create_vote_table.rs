use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260904_000009_create_poll_table::Poll,
    m20260904_000010_create_poll_option_table::PollOption,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::PollId))
                    .col(integer(Vote::OptionId))
                    .col(integer(Vote::UserId))
                    .col(
                        timestamp_with_time_zone(Vote::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Vote::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_poll_id")
                            .from(Vote::Table, Vote::PollId)
                            .to(Poll::Table, Poll::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_option_id")
                            .from(Vote::Table, Vote::OptionId)
                            .to(PollOption::Table, PollOption::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vote_user_id")
                            .from(Vote::Table, Vote::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // A user holds at most one vote per poll; re-voting upserts on this key
        manager
            .create_index(
                Index::create()
                    .name("idx_vote_poll_user")
                    .table(Vote::Table)
                    .col(Vote::PollId)
                    .col(Vote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vote {
    Table,
    Id,
    PollId,
    OptionId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
