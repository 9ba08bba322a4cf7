use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260901_000001_create_user_table::User, m20260902_000006_create_cost_table::Cost};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CostShare::Table)
                    .if_not_exists()
                    .col(pk_auto(CostShare::Id))
                    .col(integer(CostShare::CostId))
                    .col(integer(CostShare::UserId))
                    .col(big_integer(CostShare::AmountCents))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_share_cost_id")
                            .from(CostShare::Table, CostShare::CostId)
                            .to(Cost::Table, Cost::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cost_share_user_id")
                            .from(CostShare::Table, CostShare::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cost_share_cost_user")
                    .table(CostShare::Table)
                    .col(CostShare::CostId)
                    .col(CostShare::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CostShare::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CostShare {
    Table,
    Id,
    CostId,
    UserId,
    AmountCents,
}
