use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassroomDto {
    pub id: i32,
    pub name: String,
}

/// Body for both creating and renaming a classroom.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveClassroomDto {
    pub name: String,
}
