use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParams, UpdateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn register_params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        firstname: "Anna".to_string(),
        surname: "Nowak".to_string(),
        age: 25,
        email: email.to_string(),
        password: "hunter2".to_string(),
        is_organizer: false,
    }
}
