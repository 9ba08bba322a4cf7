//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes
//! to succeed or fail together.

pub mod cost;
pub mod invite;
pub mod itinerary;
pub mod member;
pub mod poll;
pub mod task;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
