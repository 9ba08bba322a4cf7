use super::*;

/// Tests that a member passes the membership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    AuthSession::new(session).set_user_id(member.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::TripMember(trip.id)])
        .await?;

    assert_eq!(user.id, member.id);

    Ok(())
}

/// Tests that the creator counts as a participant even without a membership row.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_creator_without_membership() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let creator = factory::create_user(db).await?;
    let trip = factory::create_trip(db, creator.id).await?;

    AuthSession::new(session).set_user_id(creator.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::TripMember(trip.id)])
        .await?;

    assert_eq!(user.id, creator.id);

    Ok(())
}

/// Tests that a non-member is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let outsider = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(outsider.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TripMember(trip.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a missing trip is reported as not found rather than forbidden.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TripMember(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
