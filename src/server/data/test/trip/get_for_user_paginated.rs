use super::*;

/// Tests that only trips the user belongs to are listed, newest first.
///
/// Expected: Ok with the user's two trips and total of 2
#[tokio::test]
async fn lists_member_trips_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, older) = factory::helpers::create_trip_with_owner(db).await?;
    let newer = factory::trip::create_trip(db, owner.id).await?;
    factory::trip_member::TripMemberFactory::new(db, newer.id, owner.id)
        .role("owner")
        .build()
        .await?;

    // Someone else's trip
    factory::helpers::create_trip_with_owner(db).await?;

    let (trips, total) = TripRepository::new(db)
        .get_for_user_paginated(owner.id, 0, 10)
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = trips.iter().map(|t| t.trip.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(trips.iter().all(|t| t.role == TripRole::Owner));

    Ok(())
}

/// Tests member counts and the member's role in a shared trip.
///
/// Expected: Ok with member_count 2 and role Member
#[tokio::test]
async fn includes_member_count_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let (trips, _) = TripRepository::new(db)
        .get_for_user_paginated(member.id, 0, 10)
        .await?;

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].member_count, 2);
    assert_eq!(trips[0].role, TripRole::Member);

    Ok(())
}

/// Tests paging through results.
///
/// Expected: Ok with one trip on the second page of size 2
#[tokio::test]
async fn paginates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    for _ in 0..3 {
        let trip = factory::trip::create_trip(db, owner.id).await?;
        factory::trip_member::TripMemberFactory::new(db, trip.id, owner.id)
            .role("owner")
            .build()
            .await?;
    }

    let (trips, total) = TripRepository::new(db)
        .get_for_user_paginated(owner.id, 1, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(trips.len(), 1);

    Ok(())
}

/// Tests that a creator without a membership row still sees the trip.
///
/// Expected: Ok with the trip listed once, with role Owner and no members counted
#[tokio::test]
async fn lists_created_trip_without_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let trip = factory::trip::create_trip(db, creator.id).await?;

    let (trips, total) = TripRepository::new(db)
        .get_for_user_paginated(creator.id, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].trip.id, trip.id);
    assert_eq!(trips[0].role, TripRole::Owner);
    assert_eq!(trips[0].member_count, 0);

    Ok(())
}
