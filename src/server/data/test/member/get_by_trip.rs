use super::*;

/// Tests listing members with their profile data in join order.
///
/// Expected: Ok with owner first, then the member
#[tokio::test]
async fn lists_members_with_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let member = factory::helpers::create_member(db, trip.id).await?;

    let members = MemberRepository::new(db).get_by_trip(trip.id).await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_id, owner.id);
    assert_eq!(members[0].role, TripRole::Owner);
    assert_eq!(members[0].name, owner.name);
    assert_eq!(members[1].user_id, member.id);
    assert_eq!(members[1].email, member.email);
    assert_eq!(members[1].role, TripRole::Member);

    Ok(())
}
