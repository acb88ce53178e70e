use super::*;

#[tokio::test]
async fn leaves_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;
    factory::event_participant::create_participant(db, event.id, user.id).await?;

    let service = ParticipantService::new(db);
    service.leave(event.id, user.id).await?;

    assert!(service.list_participants(event.id).await?.is_empty());

    Ok(())
}

/// Expected: Err(EventError::NotParticipating)
#[tokio::test]
async fn fails_when_not_participating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;

    let result = ParticipantService::new(db).leave(event.id, user.id).await;

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::NotParticipating { .. }))
    ));

    Ok(())
}
