use super::*;

/// Tests updating only the age of a user.
///
/// Expected: Ok with every other field unchanged
#[tokio::test]
async fn updates_age_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.register(register_params("age@example.com")).await?;

    let updated = service
        .update(
            user.id,
            UpdateUserParams {
                age: Some(23),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.age, 23);
    assert_eq!(updated.firstname, user.firstname);
    assert_eq!(updated.surname, user.surname);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password, user.password);
    assert_eq!(updated.is_organizer, user.is_organizer);

    Ok(())
}

/// Tests changing the email to one held by another user.
///
/// Expected: Err(UserError::DuplicateEmail)
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::user::create_user(db).await?;
    let user = factory::user::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::DuplicateEmail(_)))
    ));

    Ok(())
}

/// Tests resubmitting a user's own email.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParams {
                email: Some(user.email.clone()),
                surname: Some("Lewandowska".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.surname, "Lewandowska");

    Ok(())
}

/// Expected: Err(UserError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update(
            5,
            UpdateUserParams {
                age: Some(40),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::UserErr(UserError::NotFound(5)))));

    Ok(())
}

/// Tests updating a missing user with an email another user already holds.
///
/// Expected: Err(UserError::NotFound) rather than DuplicateEmail
#[tokio::test]
async fn missing_user_takes_precedence_over_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::user::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            999,
            UpdateUserParams {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(999)))
    ));

    Ok(())
}
