//! Participation factory linking users to events.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls a user in an event.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Event to join
/// - `user_id` - Participating user
///
/// # Returns
/// - `Ok(entity::event_participant::Model)` - Created participation row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_participant(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    entity::event_participant::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
