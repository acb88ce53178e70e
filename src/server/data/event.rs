//! Event data repository for database operations.
//!
//! Provides the `EventRepository` for saving, querying and removing scheduled events.
//! Every finder returns fully hydrated `Event` domain models: the organizer, classroom
//! and tags of a batch of events are loaded with one query per relation and joined in
//! memory, rather than once per event.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::server::{
    data::participant::ParticipantRepository,
    model::{
        classroom::Classroom,
        event::{Event, SaveEventParams, SearchEventsParams},
        tag::Tag,
        user::User,
    },
};

/// Repository providing database operations for scheduled events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event together with its tag links.
    ///
    /// Inserts the event row and one `event_tag` row per distinct tag ID inside a single
    /// transaction. Organizer, classroom and tags must already exist; the service
    /// resolves them before calling this.
    ///
    /// # Arguments
    /// - `params` - Event fields and related IDs
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with relations loaded
    /// - `Err(DbErr)` - Database error; nothing is persisted
    pub async fn create(&self, params: SaveEventParams) -> Result<Event, DbErr> {
        let txn = self.db.begin().await?;

        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(params.name),
            start_datetime: ActiveValue::Set(params.start_datetime),
            end_datetime: ActiveValue::Set(params.end_datetime),
            max_participants: ActiveValue::Set(params.max_participants),
            min_age: ActiveValue::Set(params.min_age),
            info: ActiveValue::Set(params.info),
            organizer_id: ActiveValue::Set(params.organizer_id),
            classroom_id: ActiveValue::Set(params.classroom_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        Self::insert_tags(&txn, event.id, &params.tag_ids).await?;

        txn.commit().await?;

        self.hydrate_one(event).await
    }

    /// Overwrites every mutable field of an event and replaces its tag set.
    ///
    /// # Arguments
    /// - `id` - ID of the event to update
    /// - `params` - New event fields and related IDs
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event with relations loaded
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(&self, id: i32, params: SaveEventParams) -> Result<Option<Event>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Event::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active_model: entity::event::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.start_datetime = ActiveValue::Set(params.start_datetime);
        active_model.end_datetime = ActiveValue::Set(params.end_datetime);
        active_model.max_participants = ActiveValue::Set(params.max_participants);
        active_model.min_age = ActiveValue::Set(params.min_age);
        active_model.info = ActiveValue::Set(params.info);
        active_model.organizer_id = ActiveValue::Set(params.organizer_id);
        active_model.classroom_id = ActiveValue::Set(params.classroom_id);
        let event = active_model.update(&txn).await?;

        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        Self::insert_tags(&txn, id, &params.tag_ids).await?;

        txn.commit().await?;

        self.hydrate_one(event).await.map(Some)
    }

    /// Deletes an event along with its tag links and participation rows.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with that ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EventTag::delete_many()
            .filter(entity::event_tag::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::EventId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets an event by ID with relations loaded.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.hydrate_one(event).await.map(Some)
    }

    /// Gets every event ordered by start time.
    pub async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::StartDatetime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(events).await
    }

    /// Gets every event owned by the given organizer, ordered by start time.
    pub async fn get_by_organizer(&self, organizer_id: i32) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizerId.eq(organizer_id))
            .order_by_asc(entity::event::Column::StartDatetime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(events).await
    }

    /// Finds events in a classroom whose interval overlaps `[start, end)`.
    ///
    /// Two intervals overlap when `existing.start < end` and `existing.end > start`, so
    /// back-to-back bookings sharing a boundary instant do not overlap.
    ///
    /// Returns bare rows since callers only inspect their IDs.
    pub async fn find_overlapping(
        &self,
        classroom_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::ClassroomId.eq(classroom_id))
            .filter(entity::event::Column::StartDatetime.lt(end))
            .filter(entity::event::Column::EndDatetime.gt(start))
            .all(self.db)
            .await
    }

    /// Gets events the user joined that ended before `now`, most recent first.
    pub async fn get_past_by_participant(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .join(
                JoinType::InnerJoin,
                entity::event::Relation::EventParticipant.def(),
            )
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .filter(entity::event::Column::EndDatetime.lt(now))
            .order_by_desc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?;

        self.hydrate(events).await
    }

    /// Gets events the user joined that start after `now`, soonest first.
    pub async fn get_future_by_participant(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .join(
                JoinType::InnerJoin,
                entity::event::Relation::EventParticipant.def(),
            )
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .filter(entity::event::Column::StartDatetime.gt(now))
            .order_by_asc(entity::event::Column::StartDatetime)
            .all(self.db)
            .await?;

        self.hydrate(events).await
    }

    /// Searches upcoming events, applying each present filter conjunctively.
    ///
    /// Only events starting after `now` are considered. When `exclude_full` is set,
    /// events whose participant count has reached `max_participants` are dropped.
    pub async fn search(
        &self,
        params: SearchEventsParams,
        now: DateTime<Utc>,
    ) -> Result<Vec<Event>, DbErr> {
        let mut query =
            entity::prelude::Event::find().filter(entity::event::Column::StartDatetime.gt(now));

        if let Some(organizer_id) = params.organizer_id {
            query = query.filter(entity::event::Column::OrganizerId.eq(organizer_id));
        }
        if let Some(classroom_id) = params.classroom_id {
            query = query.filter(entity::event::Column::ClassroomId.eq(classroom_id));
        }
        if let Some(tag_id) = params.tag_id {
            query = query
                .join(JoinType::InnerJoin, entity::event::Relation::EventTag.def())
                .filter(entity::event_tag::Column::TagId.eq(tag_id));
        }

        let mut events = query
            .order_by_asc(entity::event::Column::StartDatetime)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        if params.exclude_full {
            let event_ids: Vec<i32> = events.iter().map(|event| event.id).collect();
            let counts = ParticipantRepository::new(self.db)
                .count_by_events(&event_ids)
                .await?;

            events.retain(|event| {
                let taken = counts.get(&event.id).copied().unwrap_or(0);
                taken < event.max_participants.max(0) as u64
            });
        }

        self.hydrate(events).await
    }

    /// Counts events booked in the given classroom.
    pub async fn count_by_classroom(&self, classroom_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::ClassroomId.eq(classroom_id))
            .count(self.db)
            .await
    }

    /// Counts events owned by the given organizer.
    pub async fn count_by_organizer(&self, organizer_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::OrganizerId.eq(organizer_id))
            .count(self.db)
            .await
    }

    /// Inserts one `event_tag` row per distinct tag ID.
    async fn insert_tags<C>(conn: &C, event_id: i32, tag_ids: &[i32]) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let distinct: BTreeSet<i32> = tag_ids.iter().copied().collect();

        for tag_id in distinct {
            entity::event_tag::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                tag_id: ActiveValue::Set(tag_id),
            }
            .insert(conn)
            .await?;
        }

        Ok(())
    }

    async fn hydrate_one(&self, event: entity::event::Model) -> Result<Event, DbErr> {
        let id = event.id;

        self.hydrate(vec![event])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("Event {} not found", id)))
    }

    /// Loads organizers, classrooms and tags for a batch of events.
    ///
    /// Preserves the input order.
    async fn hydrate(&self, events: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: BTreeSet<i32> = events.iter().map(|event| event.id).collect();
        let organizer_ids: BTreeSet<i32> = events.iter().map(|event| event.organizer_id).collect();
        let classroom_ids: BTreeSet<i32> = events.iter().map(|event| event.classroom_id).collect();

        let organizers: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(organizer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, User::from_entity(user)))
            .collect();

        let classrooms: HashMap<i32, Classroom> = entity::prelude::Classroom::find()
            .filter(entity::classroom::Column::Id.is_in(classroom_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|classroom| (classroom.id, Classroom::from_entity(classroom)))
            .collect();

        let tag_links = entity::prelude::EventTag::find()
            .filter(entity::event_tag::Column::EventId.is_in(event_ids))
            .find_also_related(entity::prelude::Tag)
            .all(self.db)
            .await?;

        let mut tags_by_event: HashMap<i32, Vec<Tag>> = HashMap::new();
        for (link, tag) in tag_links {
            if let Some(tag) = tag {
                tags_by_event
                    .entry(link.event_id)
                    .or_default()
                    .push(Tag::from_entity(tag));
            }
        }

        events
            .into_iter()
            .map(|event| {
                let organizer = organizers.get(&event.organizer_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Organizer {} of event {} not found",
                        event.organizer_id, event.id
                    ))
                })?;
                let classroom = classrooms.get(&event.classroom_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Classroom {} of event {} not found",
                        event.classroom_id, event.id
                    ))
                })?;
                let mut tags = tags_by_event.remove(&event.id).unwrap_or_default();
                tags.sort_by_key(|tag| tag.id);

                Ok(Event::from_entity(event, organizer, classroom, tags))
            })
            .collect()
    }
}
