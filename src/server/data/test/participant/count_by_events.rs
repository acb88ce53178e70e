use super::*;

/// Tests counting participants across several events at once.
///
/// Expected: counts per event, with empty events absent
#[tokio::test]
async fn counts_participants_per_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, classroom) = factory::helpers::create_event_dependencies(db).await?;
    let busy = factory::event::create_event(db, organizer.id, classroom.id).await?;
    let quiet = factory::event::create_event(db, organizer.id, classroom.id).await?;
    let empty = factory::event::create_event(db, organizer.id, classroom.id).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::event_participant::create_participant(db, busy.id, first.id).await?;
    factory::event_participant::create_participant(db, busy.id, second.id).await?;
    factory::event_participant::create_participant(db, quiet.id, first.id).await?;

    let repo = ParticipantRepository::new(db);
    let counts = repo
        .count_by_events(&[busy.id, quiet.id, empty.id])
        .await?;

    assert_eq!(counts.get(&busy.id), Some(&2));
    assert_eq!(counts.get(&quiet.id), Some(&1));
    assert_eq!(counts.get(&empty.id), None);

    Ok(())
}
