use crate::server::{
    error::AppError,
    service::{classroom::ClassroomService, tag::TagService},
};
use test_utils::{builder::TestBuilder, factory};

mod classroom;
