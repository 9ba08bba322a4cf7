use crate::server::{
    data::poll::PollRepository,
    model::poll::{CreatePollParams, PollStatus},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_votes_by_user;
mod upsert_vote;
