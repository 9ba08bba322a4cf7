use super::*;

/// Tests replacing a trip's fields.
///
/// Expected: Ok(Some) with cleared optional fields
#[tokio::test]
async fn replaces_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let trip = factory::trip::TripFactory::new(db, owner.id)
        .destination(Some("Porto".to_string()))
        .build()
        .await?;

    let updated = TripRepository::new(db)
        .update(UpdateTripParams {
            id: trip.id,
            name: "Lisbon weekend".to_string(),
            description: None,
            destination: None,
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 3),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Lisbon weekend");
    assert_eq!(updated.destination, None);
    assert_eq!(updated.start_date, NaiveDate::from_ymd_opt(2026, 6, 1));
    assert_eq!(updated.creator_id, owner.id);

    Ok(())
}

/// Tests updating a missing trip.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TripRepository::new(db)
        .update(UpdateTripParams {
            id: 1,
            name: "Ghost".to_string(),
            description: None,
            destination: None,
            start_date: None,
            end_date: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that create stores the creator.
///
/// Expected: Ok with the trip findable by ID
#[tokio::test]
async fn create_then_find() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let repo = TripRepository::new(db);

    let trip = repo
        .create(CreateTripParams {
            creator_id: owner.id,
            name: "Alps".to_string(),
            description: Some("Hiking".to_string()),
            destination: None,
            start_date: None,
            end_date: None,
        })
        .await?;

    assert_eq!(repo.find_by_id(trip.id).await?, Some(trip));

    Ok(())
}
