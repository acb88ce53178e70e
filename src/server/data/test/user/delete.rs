use super::*;

/// Tests deleting a user removes their participation rows.
///
/// Expected: Ok(true) with user and participation gone
#[tokio::test]
async fn deletes_user_and_participation() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::EventParticipant::find_by_id((event.id, user.id))
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
