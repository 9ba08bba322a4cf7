//! HTTP request handlers.
//!
//! Each handler authenticates the session through `AuthGuard`, converts the request
//! DTO into service parameters, calls the service and converts the result back into a
//! DTO. Handlers carry `#[utoipa::path]` annotations that feed the OpenAPI document.

pub mod auth;
pub mod cost;
pub mod invite;
pub mod itinerary;
pub mod member;
pub mod param;
pub mod poll;
pub mod profile;
pub mod task;
pub mod trip;
