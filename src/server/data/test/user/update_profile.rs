use super::*;

/// Tests updating name and image.
///
/// Expected: Ok(Some) with new values
#[tokio::test]
async fn updates_name_and_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update_profile(UpdateProfileParams {
            user_id: user.id,
            name: "Renamed".to_string(),
            image: Some("https://example.com/me.png".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.image.as_deref(), Some("https://example.com/me.png"));
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update_profile(UpdateProfileParams {
            user_id: 42,
            name: "Nobody".to_string(),
            image: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
