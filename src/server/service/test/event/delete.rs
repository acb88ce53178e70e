use super::*;

#[tokio::test]
async fn deletes_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let service = EventService::new(db);

    service.delete(event.id).await?;

    assert!(matches!(
        service.get_by_id(event.id).await,
        Err(AppError::EventErr(EventError::NotFound(_)))
    ));
    assert!(matches!(
        service.delete(event.id).await,
        Err(AppError::EventErr(EventError::NotFound(_)))
    ));

    Ok(())
}
