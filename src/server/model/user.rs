//! User domain models and parameters.

use crate::model::user::{RegisterUserDto, UpdateUserDto, UserDto};

/// Registered user of the system.
///
/// The password is kept opaque: it is stored as provided and never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub surname: String,
    pub age: i32,
    pub email: String,
    pub password: String,
    /// Whether the user may own events.
    pub is_organizer: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            firstname: entity.firstname,
            surname: entity.surname,
            age: entity.age,
            email: entity.email,
            password: entity.password,
            is_organizer: entity.is_organizer,
        }
    }

    /// First name and surname joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }

    /// Converts the user to a DTO for API responses, dropping the password.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            firstname: self.firstname,
            surname: self.surname,
            age: self.age,
            email: self.email,
            is_organizer: self.is_organizer,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub firstname: String,
    pub surname: String,
    pub age: i32,
    pub email: String,
    pub password: String,
    pub is_organizer: bool,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            firstname: dto.firstname,
            surname: dto.surname,
            age: dto.age,
            email: dto.email,
            password: dto.password,
            is_organizer: dto.is_organizer,
        }
    }
}

/// Parameters for a partial user update.
///
/// Each field is optional; only present fields overwrite the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_organizer: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            firstname: dto.firstname,
            surname: dto.surname,
            age: dto.age,
            email: dto.email,
            password: dto.password,
            is_organizer: dto.is_organizer,
        }
    }
}
