use crate::server::data::participant::ParticipantRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod count_by_events;
mod remove;
