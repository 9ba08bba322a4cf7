use super::*;
use crate::server::{
    model::cost::{CostInput, CostShare},
    service::cost::CostService,
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn cost_input(trip_id: i32, submitted_by: i32, amount_cents: i64) -> CostInput {
    CostInput {
        trip_id,
        submitted_by,
        description: "Groceries".to_string(),
        amount_cents,
        currency: None,
        category: None,
        paid_by_id: None,
        incurred_on: None,
        shares: None,
    }
}

/// Tests the defaults applied to a minimal cost.
///
/// Expected: Ok paid by the submitter in USD, split equally with the remainder cent
/// going to the lowest user ID
#[tokio::test]
async fn creates_cost_with_equal_split() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let first = factory::helpers::create_member(db, trip.id).await?;
    let second = factory::helpers::create_member(db, trip.id).await?;

    let cost = CostService::new(db)
        .create(cost_input(trip.id, first.id, 1001))
        .await?;

    assert_eq!(cost.paid_by_id, first.id);
    assert_eq!(cost.currency, "USD");
    assert_eq!(
        cost.shares,
        vec![
            CostShare {
                user_id: owner.id,
                amount_cents: 334,
            },
            CostShare {
                user_id: first.id,
                amount_cents: 334,
            },
            CostShare {
                user_id: second.id,
                amount_cents: 333,
            },
        ]
    );

    Ok(())
}

/// Tests that explicit shares are kept as given.
///
/// Expected: Ok with exactly the submitted shares
#[tokio::test]
async fn creates_cost_with_explicit_shares() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let mut input = cost_input(trip.id, owner.id, 1000);
    input.currency = Some("eur".to_string());
    input.shares = Some(vec![
        CostShare {
            user_id: member.id,
            amount_cents: 1000,
        },
        CostShare {
            user_id: owner.id,
            amount_cents: 0,
        },
    ]);
    let cost = CostService::new(db).create(input).await?;

    assert_eq!(cost.currency, "EUR");
    assert_eq!(cost.shares.len(), 2);
    assert_eq!(
        cost.shares[1],
        CostShare {
            user_id: member.id,
            amount_cents: 1000,
        }
    );

    Ok(())
}

/// Tests rejection of invalid costs.
///
/// Expected: Err(BadRequest) for a zero amount, an outside payer and mismatched shares
#[tokio::test]
async fn rejects_invalid_costs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;
    let service = CostService::new(db);

    let zero = service.create(cost_input(trip.id, owner.id, 0)).await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let mut outside_payer = cost_input(trip.id, owner.id, 500);
    outside_payer.paid_by_id = Some(outsider.id);
    assert!(matches!(
        service.create(outside_payer).await,
        Err(AppError::BadRequest(_))
    ));

    let mut mismatched = cost_input(trip.id, owner.id, 500);
    mismatched.shares = Some(vec![CostShare {
        user_id: owner.id,
        amount_cents: 499,
    }]);
    assert!(matches!(
        service.create(mismatched).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests the upper bound on a cost's amount.
///
/// Expected: Err(BadRequest) for an amount above ten billion units, Ok at the limit
#[tokio::test]
async fn rejects_oversized_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let service = CostService::new(db);

    let result = service
        .create(cost_input(trip.id, owner.id, 1_000_000_000_001))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let mut overflowing = cost_input(trip.id, owner.id, i64::MAX);
    overflowing.shares = Some(vec![CostShare {
        user_id: owner.id,
        amount_cents: i64::MAX,
    }]);
    assert!(matches!(
        service.create(overflowing).await,
        Err(AppError::BadRequest(_))
    ));

    let cost = service
        .create(cost_input(trip.id, owner.id, 1_000_000_000_000))
        .await?;
    assert_eq!(cost.amount_cents, 1_000_000_000_000);

    Ok(())
}

/// Tests that a cost is not left behind when its shares cannot be written.
///
/// Expected: Err and no cost row in the database
#[tokio::test]
async fn create_writes_nothing_when_shares_fail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    db.execute_unprepared("DROP TABLE cost_share").await?;

    let result = CostService::new(db)
        .create(cost_input(trip.id, owner.id, 1000))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Cost::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed update leaves the stored cost untouched.
///
/// Expected: Err and the original amount still stored
#[tokio::test]
async fn update_keeps_cost_when_shares_fail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let service = CostService::new(db);
    let cost = service.create(cost_input(trip.id, owner.id, 1000)).await?;
    db.execute_unprepared("DROP TABLE cost_share").await?;

    let result = service
        .update(cost.id, cost_input(trip.id, owner.id, 2000))
        .await;

    assert!(result.is_err());
    let stored = entity::prelude::Cost::find_by_id(cost.id).one(db).await?;
    assert_eq!(stored.map(|c| c.amount_cents), Some(1000));

    Ok(())
}

/// Tests that updating without shares resplits among current participants.
///
/// Expected: Ok with the new amount split across both participants
#[tokio::test]
async fn update_resplits_shares() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let service = CostService::new(db);
    let cost = service.create(cost_input(trip.id, owner.id, 1000)).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let updated = service
        .update(cost.id, cost_input(trip.id, owner.id, 2000))
        .await?;

    assert_eq!(updated.amount_cents, 2000);
    assert_eq!(
        updated.shares,
        vec![
            CostShare {
                user_id: owner.id,
                amount_cents: 1000,
            },
            CostShare {
                user_id: member.id,
                amount_cents: 1000,
            },
        ]
    );

    Ok(())
}

/// Tests trip balances across two payers.
///
/// Expected: Ok with balances netting to zero and one settlement from debtor to creditor
#[tokio::test]
async fn computes_trip_balances() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;
    let service = CostService::new(db);

    service.create(cost_input(trip.id, owner.id, 3000)).await?;
    service.create(cost_input(trip.id, member.id, 1000)).await?;

    let balances = service.balances(trip.id).await?;

    assert_eq!(balances.currencies.len(), 1);
    let usd = &balances.currencies[0];
    assert_eq!(usd.currency, "USD");
    assert_eq!(usd.balances.iter().map(|b| b.net_cents).sum::<i64>(), 0);
    assert_eq!(usd.balances[0].name, owner.name);
    assert_eq!(usd.balances[0].net_cents, 1000);
    assert_eq!(usd.settlements.len(), 1);
    assert_eq!(usd.settlements[0].from_user_id, member.id);
    assert_eq!(usd.settlements[0].to_user_id, owner.id);
    assert_eq!(usd.settlements[0].amount_cents, 1000);

    Ok(())
}
