use super::*;

/// Tests deleting a cost removes its shares.
///
/// Expected: Ok(true) and no rows left
#[tokio::test]
async fn deletes_cost_and_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let cost = factory::create_cost(db, trip.id, owner.id).await?;

    let repo = CostRepository::new(db);

    assert!(repo.delete(trip.id, cost.id).await?);
    assert_eq!(entity::prelude::Cost::find().count(db).await?, 0);
    assert_eq!(entity::prelude::CostShare::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a cost of another trip is not deleted.
///
/// Expected: Ok(false) and the cost kept
#[tokio::test]
async fn ignores_cost_from_other_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (other_owner, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let cost = factory::create_cost(db, other_trip.id, other_owner.id).await?;

    assert!(!CostRepository::new(db).delete(trip.id, cost.id).await?);
    assert_eq!(entity::prelude::Cost::find().count(db).await?, 1);

    Ok(())
}
