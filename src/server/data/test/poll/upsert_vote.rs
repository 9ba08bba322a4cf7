use super::*;

/// Tests that voting again replaces the earlier vote.
///
/// Expected: Ok with one vote row pointing at the second option
#[tokio::test]
async fn replaces_existing_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (poll, options) = factory::create_poll(db, trip.id, owner.id).await?;

    let repo = PollRepository::new(db);
    repo.upsert_vote(poll.id, options[0].id, owner.id).await?;
    repo.upsert_vote(poll.id, options[1].id, owner.id).await?;

    assert_eq!(entity::prelude::Vote::find().count(db).await?, 1);

    let loaded = repo.find_in_trip(trip.id, poll.id, Utc::now()).await?.unwrap();
    assert_eq!(loaded.vote_of(owner.id), Some(options[1].id));
    assert_eq!(loaded.options[0].votes, 0);
    assert_eq!(loaded.options[1].votes, 1);

    Ok(())
}

/// Tests removing a vote.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (poll, options) = factory::create_poll(db, trip.id, owner.id).await?;

    let repo = PollRepository::new(db);
    repo.upsert_vote(poll.id, options[0].id, owner.id).await?;

    assert!(repo.delete_vote(poll.id, owner.id).await?);
    assert!(!repo.delete_vote(poll.id, owner.id).await?);

    Ok(())
}
