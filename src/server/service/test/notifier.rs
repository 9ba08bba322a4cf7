use super::*;
use crate::server::{
    error::notify::NotifyError,
    model::invite::{InviteStatus, TripInvite},
};

fn invite() -> TripInvite {
    TripInvite {
        id: 1,
        trip_id: 1,
        trip_name: "Summer in Lisbon".to_string(),
        inviter_id: 1,
        inviter_name: "Ana".to_string(),
        invitee_id: None,
        email: "bob@example.com".to_string(),
        status: InviteStatus::Pending,
        created_at: chrono::Utc::now(),
    }
}

/// Tests that a notifier without an API key skips sending.
///
/// Expected: Ok without any request
#[tokio::test]
async fn disabled_notifier_skips() {
    let notifier = disabled_notifier();

    assert!(!notifier.is_enabled());
    assert!(notifier.send_invite(&invite()).await.is_ok());
}

/// Tests that transport failures are reported to the caller.
///
/// Expected: Err(NotifyError::Request)
#[tokio::test]
async fn unreachable_provider_is_an_error() {
    let notifier = failing_notifier();

    let result = notifier.send_invite(&invite()).await;

    assert!(notifier.is_enabled());
    assert!(matches!(result, Err(NotifyError::Request(_))));
}
