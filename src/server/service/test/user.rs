use super::*;
use crate::server::{
    model::user::{ChangePasswordParams, UpdateProfileParams},
    service::{auth::AuthService, user::UserService},
};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

/// Tests that profile updates are trimmed and image URLs validated.
///
/// Expected: Ok with trimmed name, then Err(BadRequest) for a non-http image
#[tokio::test]
async fn updates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let updated = service
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            name: "  Ana Silva ".to_string(),
            image: Some("https://cdn.example.com/ana.png".to_string()),
        })
        .await?;

    assert_eq!(updated.name, "Ana Silva");
    assert_eq!(updated.image.as_deref(), Some("https://cdn.example.com/ana.png"));

    let result = service
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            name: "Ana".to_string(),
            image: Some("javascript:alert(1)".to_string()),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that changing the password requires the current one.
///
/// Expected: Err(BadRequest) with the wrong current password, Ok otherwise and the new
/// password works for login
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user_with_password(db, "ana@example.com", "old password").await?;
    let service = UserService::new(db);

    let wrong = service
        .change_password(ChangePasswordParams {
            user_id: user.id,
            current_password: "not my password".to_string(),
            new_password: "new password".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(AppError::BadRequest(_))));

    service
        .change_password(ChangePasswordParams {
            user_id: user.id,
            current_password: "old password".to_string(),
            new_password: "new password".to_string(),
        })
        .await?;

    let auth = AuthService::new(db);
    assert!(auth.login("ana@example.com", "old password").await.is_err());
    assert_eq!(auth.login("ana@example.com", "new password").await?.id, user.id);

    Ok(())
}

/// Tests that account deletion requires the password.
///
/// Expected: Err(BadRequest) and the user still exists
#[tokio::test]
async fn delete_account_requires_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user_with_password(db, "ana@example.com", "my password").await?;

    let result = UserService::new(db)
        .delete_account(user.id, "wrong password".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that deleting an account removes the user's footprint everywhere.
///
/// Expected: own trips deleted; in another trip the user's membership, vote, poll, cost,
/// share and invites are gone, their task is unassigned and the trip itself survives
#[tokio::test]
async fn delete_account_cascades() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = create_user_with_password(db, "ana@example.com", "my password").await?;

    // Trip created by the user
    let own_trip = factory::create_trip(db, user.id).await?;
    factory::trip_member::TripMemberFactory::new(db, own_trip.id, user.id)
        .role("owner")
        .build()
        .await?;
    factory::create_item(db, own_trip.id).await?;

    // Trip created by someone else, joined by the user
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    factory::create_membership(db, trip.id, user.id).await?;

    let (owner_poll, owner_options) = factory::create_poll(db, trip.id, owner.id).await?;
    entity::vote::ActiveModel {
        poll_id: ActiveValue::Set(owner_poll.id),
        option_id: ActiveValue::Set(owner_options[0].id),
        user_id: ActiveValue::Set(user.id),
        created_at: ActiveValue::Set(chrono::Utc::now()),
        updated_at: ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    factory::create_poll(db, trip.id, user.id).await?;

    factory::cost::CostFactory::new(db, trip.id, user.id)
        .amount_cents(500)
        .shares(vec![(owner.id, 250), (user.id, 250)])
        .build()
        .await?;
    let owner_cost = factory::cost::CostFactory::new(db, trip.id, owner.id)
        .amount_cents(1000)
        .shares(vec![(owner.id, 500), (user.id, 500)])
        .build()
        .await?;

    let task = factory::task::TaskFactory::new(db, trip.id)
        .assignee(Some(user.id))
        .build()
        .await?;
    factory::create_invite(db, trip.id, user.id).await?;

    UserService::new(db)
        .delete_account(user.id, "my password".to_string())
        .await?;

    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_none());
    assert!(entity::prelude::Trip::find_by_id(own_trip.id).one(db).await?.is_none());
    assert!(entity::prelude::Trip::find_by_id(trip.id).one(db).await?.is_some());
    assert_eq!(entity::prelude::ItineraryItem::find().count(db).await?, 0);

    let memberships = entity::prelude::TripMember::find()
        .filter(entity::trip_member::Column::UserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(memberships, 0);
    assert_eq!(entity::prelude::Vote::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Poll::find().count(db).await?, 1);
    assert_eq!(entity::prelude::TripInvite::find().count(db).await?, 0);

    let costs = entity::prelude::Cost::find().all(db).await?;
    assert_eq!(costs.len(), 1);
    assert_eq!(costs[0].id, owner_cost.id);
    let shares = entity::prelude::CostShare::find().all(db).await?;
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].user_id, owner.id);

    let task = entity::prelude::Task::find_by_id(task.id).one(db).await?.unwrap();
    assert_eq!(task.assignee_id, None);

    Ok(())
}
