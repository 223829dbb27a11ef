use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub name: String,
    pub review: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ReviewRequestDto {
    pub name: String,
    pub review: String,
    /// Star rating between 1 and 5.
    pub rating: i32,
}
