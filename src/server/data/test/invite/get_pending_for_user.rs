use super::*;

/// Tests matching by invitee ID and by email for unlinked invites.
///
/// Expected: Ok with both pending invites, excluding answered and foreign ones
#[tokio::test]
async fn matches_by_id_or_unlinked_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let (_, other_trip) = factory::helpers::create_trip_with_owner(db).await?;
    let user = factory::user::create_user(db).await?;

    let linked = factory::trip_invite::TripInviteFactory::new(db, trip.id, owner.id)
        .invitee(&user)
        .build()
        .await?;
    let unlinked = factory::trip_invite::TripInviteFactory::new(db, other_trip.id, owner.id)
        .email(user.email.clone())
        .build()
        .await?;
    factory::trip_invite::TripInviteFactory::new(db, trip.id, owner.id)
        .invitee(&user)
        .status("declined")
        .build()
        .await?;
    factory::create_invite(db, trip.id, owner.id).await?;

    let invites = InviteRepository::new(db)
        .get_pending_for_user(user.id, &user.email)
        .await?;

    let mut ids: Vec<i32> = invites.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![linked.id, unlinked.id]);

    Ok(())
}
