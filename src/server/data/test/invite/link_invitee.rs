use super::*;

/// Tests linking pending invitations to a newly registered user.
///
/// Expected: Ok(1), only the pending unlinked invite is linked
#[tokio::test]
async fn links_only_pending_unlinked_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, trip) = factory::helpers::create_trip_with_owner(db).await?;
    let pending = factory::trip_invite::TripInviteFactory::new(db, trip.id, owner.id)
        .email("new@example.com")
        .build()
        .await?;
    let declined = factory::trip_invite::TripInviteFactory::new(db, trip.id, owner.id)
        .email("new@example.com")
        .status("declined")
        .build()
        .await?;
    let user = factory::user::create_user_with_email(db, "new@example.com").await?;

    let repo = InviteRepository::new(db);
    let linked = repo.link_invitee("new@example.com", user.id).await?;

    assert_eq!(linked, 1);
    assert_eq!(repo.find_by_id(pending.id).await?.unwrap().invitee_id, Some(user.id));
    assert_eq!(repo.find_by_id(declined.id).await?.unwrap().invitee_id, None);

    Ok(())
}
