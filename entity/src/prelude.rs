pub use super::classroom::Entity as Classroom;
pub use super::event::Entity as Event;
pub use super::event_participant::Entity as EventParticipant;
pub use super::event_tag::Entity as EventTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
