//! Participation data repository.
//!
//! Participation is a bare join table between events and users; this repository
//! manages those rows and answers the counting questions capacity checks need.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::user::User;

/// Repository providing database operations for event participation.
pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    /// Creates a new ParticipantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a user in an event, recording the join time.
    ///
    /// # Returns
    /// - `Ok(())` - Participation recorded
    /// - `Err(DbErr)` - Database error, including a primary key violation when the
    ///   user already participates
    pub async fn add(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from an event.
    ///
    /// # Returns
    /// - `Ok(true)` - Participation removed
    /// - `Ok(false)` - The user was not participating
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventParticipant::delete_by_id((event_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::EventParticipant::find_by_id((event_id, user_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn count_by_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    /// Counts participants for each of the given events.
    ///
    /// Events without participants are absent from the returned map.
    pub async fn count_by_events(&self, event_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.is_in(event_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for row in rows {
            *counts.entry(row.event_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Gets the users participating in an event, ordered by user ID.
    pub async fn get_participants(&self, event_id: i32) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .join(
                JoinType::InnerJoin,
                entity::user::Relation::EventParticipant.def(),
            )
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }
}
