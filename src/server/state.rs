//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::service::notifier::InviteNotifier;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `InviteNotifier` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Sends invitation emails through the configured provider.
    pub notifier: InviteNotifier,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: InviteNotifier) -> Self {
        Self { db, notifier }
    }
}
