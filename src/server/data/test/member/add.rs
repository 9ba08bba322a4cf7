use super::*;

/// Tests adding a member and reading back the role.
///
/// Expected: Ok with role Member
#[tokio::test]
async fn adds_member_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = MemberRepository::new(db);
    repo.add(trip.id, user.id, TripRole::Member).await?;

    assert_eq!(repo.find_role(trip.id, user.id).await?, Some(TripRole::Member));

    Ok(())
}

/// Tests the unique (trip, user) index.
///
/// Expected: Err when adding the same user twice
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let result = MemberRepository::new(db)
        .add(trip.id, member.id, TripRole::Member)
        .await;

    assert!(result.is_err());

    Ok(())
}
