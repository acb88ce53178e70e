use super::*;

/// Tests that excludeFull omits events whose participant count equals the limit.
///
/// Expected: the full event is returned only without the flag
#[tokio::test]
async fn omits_full_events_when_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let full = factory::event::EventFactory::new(db, organizer.id, classroom.id)
        .max_participants(2)
        .build()
        .await?;
    for _ in 0..2 {
        let user = factory::user::create_user(db).await?;
        factory::event_participant::create_participant(db, full.id, user.id).await?;
    }

    let service = EventService::new(db);
    let with_full = service.search(SearchEventsParams::default()).await?;
    let without_full = service
        .search(SearchEventsParams {
            exclude_full: true,
            ..Default::default()
        })
        .await?;

    assert_eq!(with_full.len(), 1);
    assert!(without_full.is_empty());

    Ok(())
}

/// Tests listing events by organizer.
///
/// Expected: only the events owned by that organizer
#[tokio::test]
async fn lists_organized_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let other = factory::user::create_organizer(db).await?;
    factory::event::EventFactory::new(db, other.id, classroom.id)
        .interval(
            ten_o_clock() + Duration::days(1),
            ten_o_clock() + Duration::days(1) + Duration::hours(1),
        )
        .build()
        .await?;

    let events = EventService::new(db)
        .get_organized_events(organizer.id)
        .await?;

    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![event.id]);

    Ok(())
}

/// Tests the participant's future and past listings.
///
/// Expected: the upcoming joined event in future, nothing in past
#[tokio::test]
async fn lists_participating_events() -> Result<(), AppError> {
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

    let service = EventService::new(db);
    let future = service.get_future_participating_events(user.id).await?;
    let past = service.get_past_participating_events(user.id).await?;

    assert_eq!(future.len(), 1);
    assert_eq!(future[0].id, event.id);
    assert!(past.is_empty());

    Ok(())
}
