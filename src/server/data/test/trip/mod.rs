use crate::server::{
    data::trip::TripRepository,
    model::trip::{CreateTripParams, TripRole, UpdateTripParams},
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_with_contents;
mod get_for_user_paginated;
mod participant_ids;
mod update;
