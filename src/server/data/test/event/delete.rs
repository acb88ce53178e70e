use super::*;

/// Tests deleting an event removes its tag links and participants.
///
/// Expected: Ok(true) with no dependent rows left
#[tokio::test]
async fn deletes_event_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let tag = factory::tag::create_tag(db).await?;
    let user = factory::user::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, organizer.id, classroom.id)
        .tags(vec![tag.id])
        .build()
        .await?;
    factory::event_participant::create_participant(db, event.id, user.id).await?;

    let repo = EventRepository::new(db);

    assert!(repo.delete(event.id).await?);
    assert!(repo.find_by_id(event.id).await?.is_none());
    assert_eq!(entity::prelude::EventTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::EventParticipant::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
