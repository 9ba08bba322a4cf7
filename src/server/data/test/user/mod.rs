use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateProfileParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_ids;
mod update_profile;
