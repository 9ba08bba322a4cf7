use super::*;

/// Tests that only existing users are returned, ordered by ID.
///
/// Expected: Ok with the two known users
#[tokio::test]
async fn returns_existing_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    let users = UserRepository::new(db)
        .find_by_ids(&[second.id, 9999, first.id])
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty ID list short-circuits.
///
/// Expected: Ok with no users
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let users = UserRepository::new(db).find_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
