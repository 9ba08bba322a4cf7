use crate::server::data::task::TaskRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod unassign_user;
