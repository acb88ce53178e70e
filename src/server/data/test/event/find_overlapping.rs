use super::*;

async fn setup_booking(
    db: &sea_orm::DatabaseConnection,
) -> Result<(i32, entity::event::Model), DbErr> {
    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let start = fixture::event::default_start();
    let event = factory::event::EventFactory::new(db, organizer.id, classroom.id)
        .interval(start, start + Duration::hours(1))
        .build()
        .await?;

    Ok((classroom.id, event))
}

/// Tests that an interval starting inside an existing booking overlaps it.
///
/// Existing 10:00-11:00, queried 10:30-11:30.
///
/// Expected: the existing event is returned
#[tokio::test]
async fn finds_partially_overlapping_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom_id, event) = setup_booking(db).await?;
    let start = event.start_datetime + Duration::minutes(30);

    let repo = EventRepository::new(db);
    let overlapping = repo
        .find_overlapping(classroom_id, start, start + Duration::hours(1))
        .await?;

    assert_eq!(overlapping.len(), 1);
    assert_eq!(overlapping[0].id, event.id);

    Ok(())
}

/// Tests that back-to-back bookings sharing a boundary do not overlap.
///
/// Existing 10:00-11:00, queried 11:00-12:00 and 09:00-10:00.
///
/// Expected: no events returned
#[tokio::test]
async fn ignores_adjacent_intervals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (classroom_id, event) = setup_booking(db).await?;

    let repo = EventRepository::new(db);
    let after = repo
        .find_overlapping(
            classroom_id,
            event.end_datetime,
            event.end_datetime + Duration::hours(1),
        )
        .await?;
    let before = repo
        .find_overlapping(
            classroom_id,
            event.start_datetime - Duration::hours(1),
            event.start_datetime,
        )
        .await?;

    assert!(after.is_empty());
    assert!(before.is_empty());

    Ok(())
}

/// Tests that bookings in other classrooms are ignored.
///
/// Expected: no events returned
#[tokio::test]
async fn ignores_other_classrooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_classroom_id, event) = setup_booking(db).await?;
    let other = factory::classroom::create_classroom(db).await?;

    let repo = EventRepository::new(db);
    let overlapping = repo
        .find_overlapping(other.id, event.start_datetime, event.end_datetime)
        .await?;

    assert!(overlapping.is_empty());

    Ok(())
}
