use super::*;

/// Tests that items come back ordered by start time.
///
/// Expected: Ok with earliest item first, other trips excluded
#[tokio::test]
async fn orders_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (_, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let now = Utc::now();

    let late = factory::itinerary_item::ItineraryItemFactory::new(db, trip.id)
        .start_time(now + Duration::days(3))
        .build()
        .await?;
    let early = factory::itinerary_item::ItineraryItemFactory::new(db, trip.id)
        .start_time(now + Duration::days(1))
        .kind("lodging")
        .build()
        .await?;
    factory::create_item(db, other_trip.id).await?;

    let items = ItineraryRepository::new(db).get_by_trip(trip.id).await?;

    let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![early.id, late.id]);
    assert_eq!(items[0].kind, ItineraryKind::Lodging);

    Ok(())
}
