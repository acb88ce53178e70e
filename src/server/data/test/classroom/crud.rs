use super::*;

#[tokio::test]
async fn creates_and_finds_classroom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClassroomRepository::new(db);
    let created = repo.create("Aula A".to_string()).await?;
    let found = repo.find_by_id(created.id).await?;

    assert_eq!(found, Some(created));

    Ok(())
}

/// Expected: classrooms ordered by name
#[tokio::test]
async fn lists_classrooms_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::classroom::ClassroomFactory::new(db)
        .name("B12")
        .build()
        .await?;
    factory::classroom::ClassroomFactory::new(db)
        .name("A01")
        .build()
        .await?;

    let repo = ClassroomRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|classroom| classroom.name)
        .collect();

    assert_eq!(names, vec!["A01".to_string(), "B12".to_string()]);

    Ok(())
}

#[tokio::test]
async fn renames_classroom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::classroom::create_classroom(db).await?;

    let repo = ClassroomRepository::new(db);
    let updated = repo.update(classroom.id, "Lab 3".to_string()).await?;

    assert_eq!(updated.map(|c| c.name), Some("Lab 3".to_string()));
    assert!(repo.update(999, "Nowhere".to_string()).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn deletes_classroom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let classroom = factory::classroom::create_classroom(db).await?;

    let repo = ClassroomRepository::new(db);

    assert!(repo.delete(classroom.id).await?);
    assert!(repo.find_by_id(classroom.id).await?.is_none());
    assert!(!repo.delete(classroom.id).await?);

    Ok(())
}
