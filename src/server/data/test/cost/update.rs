use super::*;

/// Tests that updating replaces the whole share list.
///
/// Expected: Ok(Some) with only the new shares stored
#[tokio::test]
async fn replaces_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;
    let cost = factory::cost::CostFactory::new(db, trip.id, owner.id)
        .amount_cents(1000)
        .shares(vec![(owner.id, 500), (member.id, 500)])
        .build()
        .await?;

    let updated = CostRepository::new(db)
        .update(
            cost.id,
            SaveCostParams {
                trip_id: trip.id,
                description: "Taxi".to_string(),
                amount_cents: 3000,
                currency: "EUR".to_string(),
                category: None,
                paid_by_id: member.id,
                incurred_on: NaiveDate::from_ymd_opt(2026, 7, 2).unwrap(),
                shares: vec![share(owner.id, 3000)],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.paid_by_id, member.id);
    assert_eq!(updated.shares, vec![share(owner.id, 3000)]);
    assert_eq!(entity::prelude::CostShare::find().count(db).await?, 1);

    Ok(())
}
