use crate::server::{data::member::MemberRepository, model::trip::TripRole};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod get_by_trip;
mod remove;
