use super::*;

/// Tests removing an existing membership.
///
/// Expected: Ok(true), then Ok(false) on a second attempt
#[tokio::test]
async fn removes_membership_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.remove(trip.id, member.id).await?);
    assert!(!repo.remove(trip.id, member.id).await?);
    assert_eq!(repo.find_role(trip.id, member.id).await?, None);

    Ok(())
}

/// Tests removing all memberships of a user across trips.
///
/// Expected: Ok(2)
#[tokio::test]
async fn deletes_all_memberships_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_trip_with_owner(db).await?;
    let (_, second) = factory::helpers::create_trip_with_owner(db).await?;
    let user = factory::helpers::create_member(db, first.id).await?;
    factory::create_membership(db, second.id, user.id).await?;

    let removed = MemberRepository::new(db).delete_by_user(user.id).await?;

    assert_eq!(removed, 2);

    Ok(())
}
