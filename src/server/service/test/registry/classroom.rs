use super::*;

#[tokio::test]
async fn manages_classroom_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ClassroomService::new(db);
    let classroom = service.create("Gym".to_string()).await?;
    let renamed = service.update(classroom.id, "Gymnasium".to_string()).await?;

    assert_eq!(renamed.name, "Gymnasium");
    assert_eq!(service.get_all().await?.len(), 1);

    service.delete(classroom.id).await?;

    assert!(matches!(
        service.get_by_id(classroom.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a classroom that events still book.
///
/// Expected: Err(AppError::Conflict) with the classroom kept
#[tokio::test]
async fn refuses_booked_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, classroom, _event) =
        factory::helpers::create_event_with_dependencies(db).await?;

    let service = ClassroomService::new(db);
    let result = service.delete(classroom.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(classroom.id).await.is_ok());

    Ok(())
}

#[tokio::test]
async fn update_fails_for_missing_classroom() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassroomService::new(db)
        .update(12, "Attic".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
