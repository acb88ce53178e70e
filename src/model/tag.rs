use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i32,
    pub label: String,
}

/// Body for both creating and relabelling a tag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveTagDto {
    pub label: String,
}
