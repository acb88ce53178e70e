use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with a subsequent lookup returning None
#[tokio::test]
async fn deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db);
    service.delete(user.id).await?;

    assert!(service.get_by_id(user.id).await?.is_none());

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

    let result = UserService::new(db).delete(404).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::NotFound(404)))
    ));

    Ok(())
}

/// Tests deleting an organizer who still owns an event.
///
/// Expected: Err(UserError::HasOrganizedEvents) with the user kept
#[tokio::test]
async fn refuses_organizer_with_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _classroom, _event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let service = UserService::new(db);
    let result = service.delete(organizer.id).await;

    assert!(matches!(
        result,
        Err(AppError::UserErr(UserError::HasOrganizedEvents(_)))
    ));
    assert!(service.get_by_id(organizer.id).await?.is_some());

    Ok(())
}
