use crate::server::{
    data::cost::CostRepository,
    model::cost::{CostShare, SaveCostParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn share(user_id: i32, amount_cents: i64) -> CostShare {
    CostShare {
        user_id,
        amount_cents,
    }
}
