use super::*;

/// Tests replacing an item's fields.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let item = factory::create_item(db, trip.id).await?;
    let start = Utc::now() + Duration::days(5);

    let updated = ItineraryRepository::new(db)
        .update(
            item.id,
            SaveItineraryItemParams {
                trip_id: trip.id,
                title: "Train to Porto".to_string(),
                description: None,
                location: Some("Santa Apolonia".to_string()),
                kind: ItineraryKind::Transport,
                start_time: start,
                end_time: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Train to Porto");
    assert_eq!(updated.kind, ItineraryKind::Transport);
    assert_eq!(updated.end_time, None);

    Ok(())
}

/// Tests that an item cannot be updated through another trip.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_item_from_other_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (_, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let item = factory::create_item(db, other_trip.id).await?;

    let result = ItineraryRepository::new(db)
        .update(
            item.id,
            SaveItineraryItemParams {
                trip_id: trip.id,
                title: "Hijack".to_string(),
                description: None,
                location: None,
                kind: ItineraryKind::Other,
                start_time: Utc::now(),
                end_time: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
