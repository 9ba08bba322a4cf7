use super::*;

/// Tests creating a user stores the given fields.
///
/// Expected: Ok with the user findable by email afterwards
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            password_hash: "aa".to_string(),
            password_salt: "bb".to_string(),
        })
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.name, "Ana");
    assert_eq!(user.image, None);

    let found = repo.find_by_email("ana@example.com").await?;
    assert_eq!(found, Some(user));

    let credentials = repo.find_credentials_by_email("ana@example.com").await?.unwrap();
    assert_eq!(credentials.password_hash, "aa");
    assert_eq!(credentials.password_salt, "bb");

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            email: "taken@example.com".to_string(),
            name: "Other".to_string(),
            password_hash: "aa".to_string(),
            password_salt: "bb".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
