use super::*;

/// Tests that deleting a trip removes all of its content.
///
/// Expected: Ok with no rows left for the trip and other trips untouched
#[tokio::test]
async fn deletes_trip_and_all_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;
    factory::create_invite(db, trip.id, owner.id).await?;
    factory::create_item(db, trip.id).await?;
    factory::cost::CostFactory::new(db, trip.id, owner.id)
        .amount_cents(1000)
        .shares(vec![(owner.id, 500), (member.id, 500)])
        .build()
        .await?;
    factory::task::TaskFactory::new(db, trip.id)
        .assignee(Some(member.id))
        .build()
        .await?;
    let (poll, options) = factory::create_poll(db, trip.id, owner.id).await?;
    entity::vote::ActiveModel {
        poll_id: sea_orm::ActiveValue::Set(poll.id),
        option_id: sea_orm::ActiveValue::Set(options[0].id),
        user_id: sea_orm::ActiveValue::Set(member.id),
        created_at: sea_orm::ActiveValue::Set(chrono::Utc::now()),
        updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let (_, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    factory::create_item(db, other_trip.id).await?;

    TripRepository::new(db).delete_with_contents(trip.id).await?;

    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_none());
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);
    assert_eq!(entity::prelude::PollOption::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Poll::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CostShare::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Cost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::TripInvite::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::TripMember::find()
            .filter(entity::trip_member::Column::TripId.eq(trip.id))
            .count(db)
            .await?,
        0
    );

    // Other trip keeps its content
    assert!(entity::prelude::Trip::find_by_id(other_trip.id).one(db).await?.is_some());
    assert_eq!(entity::prelude::ItineraryItem::find().count(db).await?, 1);

    Ok(())
}
