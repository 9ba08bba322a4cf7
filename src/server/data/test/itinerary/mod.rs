use crate::server::{
    data::itinerary::ItineraryRepository,
    model::itinerary::{ItineraryKind, SaveItineraryItemParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_trip;
mod update;
