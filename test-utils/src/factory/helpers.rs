//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an organizer and a classroom, the prerequisites for any event.
///
/// # Returns
/// - `Ok((organizer, classroom))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::classroom::Model), DbErr> {
    let organizer = crate::factory::user::create_organizer(db).await?;
    let classroom = crate::factory::classroom::create_classroom(db).await?;

    Ok((organizer, classroom))
}

/// Creates a complete event with its organizer and classroom.
///
/// All entities use default values. Use the individual factories to customize.
///
/// # Returns
/// - `Ok((organizer, classroom, event))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::classroom::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let (organizer, classroom) = create_event_dependencies(db).await?;
    let event = crate::factory::event::create_event(db, organizer.id, classroom.id).await?;

    Ok((organizer, classroom, event))
}
