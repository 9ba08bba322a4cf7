use super::*;

/// Tests creating a poll numbers its options in order.
///
/// Expected: Ok with active status and positions 0..n
#[tokio::test]
async fn creates_poll_with_ordered_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;

    let poll = PollRepository::new(db)
        .create(CreatePollParams {
            trip_id: trip.id,
            creator_id: owner.id,
            question: "Where to eat?".to_string(),
            options: vec!["Tasca".to_string(), "Sushi".to_string(), "Pizza".to_string()],
            expires_at: Some(Utc::now() + Duration::days(1)),
        })
        .await?;

    assert_eq!(poll.status, PollStatus::Active);
    let labels: Vec<&str> = poll.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Tasca", "Sushi", "Pizza"]);
    let positions: Vec<i32> = poll.options.iter().map(|o| o.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    Ok(())
}

/// Tests that loading derives an expired status from a past expiry.
///
/// Expected: Ok(Some) with status Expired
#[tokio::test]
async fn derives_expired_status_on_load() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (poll, _) = factory::poll::PollFactory::new(db, trip.id, owner.id)
        .expires_at(Some(Utc::now() - Duration::minutes(5)))
        .build()
        .await?;

    let loaded = PollRepository::new(db)
        .find_in_trip(trip.id, poll.id, Utc::now())
        .await?
        .unwrap();

    assert_eq!(loaded.status, PollStatus::Expired);

    Ok(())
}
