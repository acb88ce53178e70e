use super::*;

/// Tests creating an event with tags.
///
/// Verifies that the repository inserts the event row and its tag links in one go
/// and returns the event with organizer, classroom and tags resolved.
///
/// Expected: Ok with hydrated event
#[tokio::test]
async fn creates_event_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let math = factory::tag::create_tag(db).await?;
    let art = factory::tag::create_tag(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(save_params(organizer.id, classroom.id, vec![art.id, math.id]))
        .await?;

    assert!(event.id > 0);
    assert_eq!(event.name, "Rust Workshop");
    assert_eq!(event.min_age, Some(16));
    assert_eq!(event.info.as_deref(), Some("Bring a laptop"));
    assert_eq!(event.organizer.id, organizer.id);
    assert_eq!(event.classroom.id, classroom.id);

    let tag_ids: Vec<i32> = event.tags.iter().map(|t| t.id).collect();
    assert_eq!(tag_ids, vec![math.id, art.id]);

    Ok(())
}

/// Tests that repeated tag IDs produce a single link.
///
/// Expected: Ok with one event_tag row
#[tokio::test]
async fn deduplicates_tag_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(save_params(organizer.id, classroom.id, vec![tag.id, tag.id]))
        .await?;

    let links = entity::prelude::EventTag::find()
        .filter(entity::event_tag::Column::EventId.eq(event.id))
        .count(db)
        .await?;
    assert_eq!(links, 1);
    assert_eq!(event.tags.len(), 1);

    Ok(())
}

/// Tests that a failing tag insert rolls back the event row.
///
/// Expected: Err with no event persisted
#[tokio::test]
async fn rolls_back_when_tag_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;

    let repo = EventRepository::new(db);
    let result = repo
        .create(save_params(organizer.id, classroom.id, vec![999]))
        .await;

    assert!(result.is_err());

    let events = entity::prelude::Event::find().count(db).await?;
    assert_eq!(events, 0);

    Ok(())
}
