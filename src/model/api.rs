use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Response body for create operations that return the new row id.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct IdDto {
    pub id: i32,
}
