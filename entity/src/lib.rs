//! SeaORM entity definitions for the course manager schema.

pub mod prelude;

pub mod classroom;
pub mod event;
pub mod event_participant;
pub mod event_tag;
pub mod tag;
pub mod user;
