//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder for customization and a
//! `create_*` shorthand for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (owner, trip) = factory::helpers::create_trip_with_owner(&db).await?;
//! let member = factory::helpers::create_member(&db, trip.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ana@example.com")
//!     .name("Ana")
//!     .build()
//!     .await?;
//!
//! let poll = factory::poll::PollFactory::new(&db, trip.id, user.id)
//!     .options(&["Lisbon", "Porto"])
//!     .expires_at(Some(Utc::now() - Duration::hours(1)))
//!     .build()
//!     .await?;
//! ```

pub mod cost;
pub mod helpers;
pub mod itinerary_item;
pub mod poll;
pub mod task;
pub mod trip;
pub mod trip_invite;
pub mod trip_member;
pub mod user;

pub use cost::create_cost;
pub use itinerary_item::create_item;
pub use poll::create_poll;
pub use task::create_task;
pub use trip::create_trip;
pub use trip_invite::create_invite;
pub use trip_member::create_membership;
pub use user::create_user;
