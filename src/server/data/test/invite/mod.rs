use crate::server::{
    data::invite::InviteRepository,
    model::invite::{InviteStatus, NewInvite},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_pending_for_user;
mod link_invitee;
