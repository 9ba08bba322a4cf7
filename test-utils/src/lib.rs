//! Tripboard Test Utils
//!
//! Shared testing utilities for the tripboard server. Provides a builder for test contexts
//! backed by in-memory SQLite databases, plus factories for inserting entities with sensible
//! defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories for users, trips, members and trip content
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_trip() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_trip_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
