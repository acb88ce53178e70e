use crate::model::tag::TagDto;

/// Label that can be attached to any number of events.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            label: self.label,
        }
    }
}
