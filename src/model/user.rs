use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as returned by the API. The password is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub firstname: String,
    pub surname: String,
    pub age: i32,
    pub email: String,
    pub is_organizer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub firstname: String,
    pub surname: String,
    pub age: i32,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_organizer: bool,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_organizer: Option<bool>,
}
