//! Shared helper utilities for factory methods.
//!
//! ID generation plus shortcuts for creating entities together with the rows they
//! depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a trip they own, including the owner membership row.
///
/// Mirrors what the trip service does on creation, so access checks treat the
/// returned user both as creator and as a member.
///
/// # Returns
/// - `Ok((owner, trip))` - The created user and trip
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::trip::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let trip = crate::factory::trip::create_trip(db, owner.id).await?;
    crate::factory::trip_member::TripMemberFactory::new(db, trip.id, owner.id)
        .role("owner")
        .build()
        .await?;

    Ok((owner, trip))
}

/// Creates a new user and adds them to the trip as a regular member.
pub async fn create_member(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    crate::factory::trip_member::create_membership(db, trip_id, user.id).await?;

    Ok(user)
}
