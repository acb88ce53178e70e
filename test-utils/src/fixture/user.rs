//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test first name.
pub const DEFAULT_FIRSTNAME: &str = "Jan";

/// Default test surname.
pub const DEFAULT_SURNAME: &str = "Kowalski";

/// Default test age.
pub const DEFAULT_AGE: i32 = 30;

/// Default test email.
pub const DEFAULT_EMAIL: &str = "jan.kowalski@example.com";

/// Default test password.
pub const DEFAULT_PASSWORD: &str = "secret";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - firstname: `"Jan"`
/// - surname: `"Kowalski"`
/// - age: `30`
/// - email: `"jan.kowalski@example.com"`
/// - password: `"secret"`
/// - is_organizer: `false`
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            entity: user::Model {
                id: 1,
                firstname: DEFAULT_FIRSTNAME.to_string(),
                surname: DEFAULT_SURNAME.to_string(),
                age: DEFAULT_AGE,
                email: DEFAULT_EMAIL.to_string(),
                password: DEFAULT_PASSWORD.to_string(),
                is_organizer: false,
            },
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.entity.firstname = firstname.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.entity.surname = surname.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.entity.age = age;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.entity.password = password.into();
        self
    }

    pub fn is_organizer(mut self, is_organizer: bool) -> Self {
        self.entity.is_organizer = is_organizer;
        self
    }

    /// Builds the user entity model.
    pub fn build(self) -> user::Model {
        self.entity
    }
}
