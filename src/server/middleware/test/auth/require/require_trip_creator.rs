use super::*;

/// Tests that the trip creator passes the creator check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_creator() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;

    AuthSession::new(session).set_user_id(owner.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::TripCreator(trip.id)])
        .await?;

    assert_eq!(user.id, owner.id);

    Ok(())
}

/// Tests that a regular member is denied creator-only access.
///
/// Expected: Err(AuthError::AccessDenied) naming the member
#[tokio::test]
async fn denies_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TripCreator(trip.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, member.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
