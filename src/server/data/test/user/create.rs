use super::*;

/// Tests registering a new user.
///
/// Verifies that the repository inserts the user with every provided field and a
/// generated ID.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(register_params("anna@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.firstname, "Anna");
    assert_eq!(user.surname, "Nowak");
    assert_eq!(user.age, 25);
    assert_eq!(user.email, "anna@example.com");
    assert!(!user.is_organizer);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that the unique index rejects a second user with the same email.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_email_at_database_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(register_params("same@example.com")).await?;
    let result = repo.create(register_params("same@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
