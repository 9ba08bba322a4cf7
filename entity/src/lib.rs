//! SeaORM entity definitions for the trip planner schema.

pub mod prelude;

pub mod cost;
pub mod cost_share;
pub mod itinerary_item;
pub mod poll;
pub mod poll_option;
pub mod task;
pub mod trip;
pub mod trip_invite;
pub mod trip_member;
pub mod user;
pub mod vote;
