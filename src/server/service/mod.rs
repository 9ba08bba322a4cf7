//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, poll lifecycle, cost splitting and balances
//! - **Orchestration**: Coordinating repositories and the invitation email notifier
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes and cascades in one transaction

pub mod auth;
pub mod cost;
pub mod invite;
pub mod itinerary;
pub mod member;
pub mod notifier;
pub mod poll;
pub mod task;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
