use super::*;

/// Tests unassigning within a single trip.
///
/// Expected: Ok(1), the task in the other trip keeps its assignee
#[tokio::test]
async fn unassigns_within_trip_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (_, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let user = factory::helpers::create_member(db, trip.id).await?;
    factory::create_membership(db, other_trip.id, user.id).await?;

    let task = factory::task::TaskFactory::new(db, trip.id)
        .assignee(Some(user.id))
        .build()
        .await?;
    let other_task = factory::task::TaskFactory::new(db, other_trip.id)
        .assignee(Some(user.id))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let count = repo.unassign_user(user.id, Some(trip.id)).await?;

    assert_eq!(count, 1);
    assert_eq!(repo.find_in_trip(trip.id, task.id).await?.unwrap().assignee_id, None);
    assert_eq!(
        repo.find_in_trip(other_trip.id, other_task.id)
            .await?
            .unwrap()
            .assignee_id,
        Some(user.id)
    );

    Ok(())
}

/// Tests unassigning across all trips.
///
/// Expected: Ok(2)
#[tokio::test]
async fn unassigns_everywhere_without_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let user = factory::helpers::create_member(db, trip.id).await?;
    for _ in 0..2 {
        factory::task::TaskFactory::new(db, trip.id)
            .assignee(Some(user.id))
            .build()
            .await?;
    }

    let count = TaskRepository::new(db).unassign_user(user.id, None).await?;

    assert_eq!(count, 2);

    Ok(())
}
