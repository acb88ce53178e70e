use super::*;

/// Expected: Ok with the organizer
#[tokio::test]
async fn returns_organizer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organizer = factory::user::create_organizer(db).await?;

    let user = UserService::new(db).get_organizer(organizer.id).await?;

    assert_eq!(user.id, organizer.id);
    assert!(user.is_organizer);

    Ok(())
}

/// Tests looking up a regular user as an organizer.
///
/// Expected: Err(UserError::NotOrganizer)
#[tokio::test]
async fn rejects_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = UserService::new(db).get_organizer(user.id).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotOrganizer(id))) if id == user.id
    ));

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

    let result = UserService::new(db).get_organizer(77).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(77)))
    ));

    Ok(())
}
