use crate::model::classroom::ClassroomDto;

/// Room that events can book.
#[derive(Debug, Clone, PartialEq)]
pub struct Classroom {
    pub id: i32,
    pub name: String,
}

impl Classroom {
    pub fn from_entity(entity: entity::classroom::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ClassroomDto {
        ClassroomDto {
            id: self.id,
            name: self.name,
        }
    }
}
