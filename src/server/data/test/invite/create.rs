use super::*;

/// Tests creating an invitation returns it enriched with names.
///
/// Expected: Ok with pending status, trip name and inviter name
#[tokio::test]
async fn creates_pending_invite_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;

    let repo = InviteRepository::new(db);
    let invite = repo
        .create(NewInvite {
            trip_id: trip.id,
            inviter_id: owner.id,
            invitee_id: None,
            email: "friend@example.com".to_string(),
        })
        .await?;

    assert_eq!(invite.status, InviteStatus::Pending);
    assert_eq!(invite.trip_name, trip.name);
    assert_eq!(invite.inviter_name, owner.name);
    assert_eq!(invite.invitee_id, None);
    assert!(repo.has_pending(trip.id, "friend@example.com").await?);
    assert!(!repo.has_pending(trip.id, "other@example.com").await?);

    Ok(())
}

/// Tests that answered invites do not count as pending.
///
/// Expected: has_pending returns false after set_status
#[tokio::test]
async fn answered_invite_is_not_pending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let invitee = factory::user::create_user(db).await?;
    let invite = factory::trip_invite::TripInviteFactory::new(db, trip.id, owner.id)
        .invitee(&invitee)
        .build()
        .await?;

    let repo = InviteRepository::new(db);
    repo.set_status(invite.id, InviteStatus::Declined, invitee.id)
        .await?;

    assert!(!repo.has_pending(trip.id, &invitee.email).await?);
    let stored = repo.find_by_id(invite.id).await?.unwrap();
    assert_eq!(stored.status, InviteStatus::Declined);

    Ok(())
}
