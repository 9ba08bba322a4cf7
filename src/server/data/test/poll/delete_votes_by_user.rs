use super::*;

/// Tests that trip-scoped deletion leaves votes in other trips.
///
/// Expected: Ok(1) and the other trip's vote kept
#[tokio::test]
async fn scopes_to_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (other_owner, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let voter = factory::helpers::create_member(db, trip.id).await?;
    factory::create_membership(db, other_trip.id, voter.id).await?;

    let (poll, options) = factory::create_poll(db, trip.id, owner.id).await?;
    let (other_poll, other_options) =
        factory::create_poll(db, other_trip.id, other_owner.id).await?;

    let repo = PollRepository::new(db);
    repo.upsert_vote(poll.id, options[0].id, voter.id).await?;
    repo.upsert_vote(other_poll.id, other_options[0].id, voter.id)
        .await?;

    let removed = repo.delete_votes_by_user(voter.id, Some(trip.id)).await?;

    assert_eq!(removed, 1);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    Ok(())
}
