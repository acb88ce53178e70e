use super::*;

/// Tests a partial update that only changes the age.
///
/// Verifies that absent fields keep their stored values.
///
/// Expected: Ok(Some) with only age changed
#[tokio::test]
async fn updates_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).age(30).build().await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                age: Some(31),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.age, 31);
    assert_eq!(updated.firstname, user.firstname);
    assert_eq!(updated.surname, user.surname);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password, user.password);
    assert_eq!(updated.is_organizer, user.is_organizer);

    Ok(())
}

/// Tests promoting a user to organizer.
///
/// Expected: Ok(Some) with is_organizer set
#[tokio::test]
async fn updates_organizer_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                is_organizer: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.is_organizer);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, UpdateUserParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
