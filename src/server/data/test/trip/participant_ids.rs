use super::*;

/// Tests that the creator and members are participants and others are not.
///
/// Expected: Ok with creator and member IDs ascending
#[tokio::test]
async fn includes_creator_and_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;
    let outsider = factory::user::create_user(db).await?;

    let repo = TripRepository::new(db);

    assert_eq!(repo.participant_ids(trip.id).await?, vec![owner.id, member.id]);
    assert!(repo.is_participant(trip.id, member.id).await?);
    assert!(!repo.is_participant(trip.id, outsider.id).await?);

    Ok(())
}

/// Tests that the creator counts as participant even without a membership row.
///
/// Expected: Ok(true)
#[tokio::test]
async fn creator_without_membership_row_is_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let trip = factory::trip::create_trip(db, owner.id).await?;

    assert!(TripRepository::new(db).is_participant(trip.id, owner.id).await?);

    Ok(())
}

/// Tests a missing trip has no participants.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn missing_trip_has_no_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(TripRepository::new(db).participant_ids(77).await?.is_empty());

    Ok(())
}
