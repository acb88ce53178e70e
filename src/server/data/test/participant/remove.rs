use super::*;

#[tokio::test]
async fn removes_participant() -> Result<(), DbErr> {
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

    let repo = ParticipantRepository::new(db);

    assert!(repo.remove(event.id, user.id).await?);
    assert!(!repo.exists(event.id, user.id).await?);
    assert!(!repo.remove(event.id, user.id).await?);

    Ok(())
}
