use super::*;

/// Tests enrolling a user in an event.
///
/// Expected: Ok with participation visible through exists and count
#[tokio::test]
async fn adds_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.add(event.id, user.id).await?;

    assert!(repo.exists(event.id, user.id).await?);
    assert_eq!(repo.count_by_event(event.id).await?, 1);

    Ok(())
}

/// Tests that the composite primary key rejects a second enrollment.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_participation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _classroom, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.add(event.id, user.id).await?;

    assert!(repo.add(event.id, user.id).await.is_err());
    assert_eq!(repo.count_by_event(event.id).await?, 1);

    Ok(())
}
