use crate::server::{
    error::{event::EventError, user::UserError, AppError},
    model::event::{SaveEventParams, SearchEventsParams},
    service::event::EventService,
};
use chrono::{DateTime, Duration, Utc};
use test_utils::{builder::TestBuilder, factory, fixture};

mod delete;
mod search;

fn save_params(
    organizer_id: i32,
    classroom_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> SaveEventParams {
    SaveEventParams {
        name: "Chemistry Lab".to_string(),
        start_datetime: start,
        end_datetime: end,
        max_participants: 10,
        min_age: None,
        info: None,
        organizer_id,
        classroom_id,
        tag_ids: vec![],
    }
}

/// 10:00 on the default fixture day.
fn ten_o_clock() -> DateTime<Utc> {
    fixture::event::default_start()
}
