use super::*;

/// Tests registering a user with a fresh email.
///
/// Expected: Ok with the user retrievable by email afterwards
#[tokio::test]
async fn registers_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.register(register_params("maria@example.com")).await?;

    let found = service.get_by_email("maria@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests registering two users with the same email.
///
/// Expected: first Ok, second Err(UserError::DuplicateEmail)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let first = service.register(register_params("dup@example.com")).await;
    let second = service.register(register_params("dup@example.com")).await;

    assert!(first.is_ok());
    assert!(matches!(
        second,
        Err(AppError::UserErr(UserError::DuplicateEmail(ref email))) if email == "dup@example.com"
    ));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that blank required fields are rejected before touching the database.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = register_params("blank@example.com");
    params.firstname = "   ".to_string();

    let service = UserService::new(db);
    let result = service.register(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
