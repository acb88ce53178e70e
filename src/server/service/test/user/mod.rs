use crate::server::{
    error::{user::UserError, AppError},
    model::user::{RegisterUserParams, UpdateUserParams},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_organizer;
mod register;
mod update;

fn register_params(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        firstname: "Maria".to_string(),
        surname: "Wisniewska".to_string(),
        age: 22,
        email: email.to_string(),
        password: "p4ssw0rd".to_string(),
        is_organizer: false,
    }
}
