use super::*;

/// Tests creating a cost with shares.
///
/// Expected: Ok with shares ordered by user ID
#[tokio::test]
async fn creates_cost_with_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let cost = CostRepository::new(db)
        .create(SaveCostParams {
            trip_id: trip.id,
            description: "Dinner".to_string(),
            amount_cents: 4500,
            currency: "EUR".to_string(),
            category: Some("food".to_string()),
            paid_by_id: owner.id,
            incurred_on: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            shares: vec![share(member.id, 2000), share(owner.id, 2500)],
        })
        .await?;

    assert_eq!(cost.amount_cents, 4500);
    assert_eq!(cost.shares, vec![share(owner.id, 2500), share(member.id, 2000)]);
    assert_eq!(entity::prelude::CostShare::find().count(db).await?, 2);

    Ok(())
}
