use super::*;

mod require_trip_creator;
mod require_trip_member;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale ID
#[tokio::test]
async fn rejects_stale_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 4242)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests empty permission list grants access to any logged-in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.email, user.email);

    Ok(())
}

/// Tests that every permission in the list is checked.
///
/// Expected: Err(AccessDenied) when the member passes the first check but not the second
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TripMember(trip.id), Permission::TripCreator(trip.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, member.id);
            assert!(msg.contains("creator"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
