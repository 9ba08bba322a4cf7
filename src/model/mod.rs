//! API data transfer objects.
//!
//! These types define the JSON wire format of the REST API. They are produced from
//! domain models at the controller boundary and carry OpenAPI schemas for the docs.

pub mod api;
pub mod auth;
pub mod cost;
pub mod invite;
pub mod itinerary;
pub mod member;
pub mod poll;
pub mod task;
pub mod trip;
pub mod user;
