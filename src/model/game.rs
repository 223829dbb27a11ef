use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: String,
    #[serde(rename = "type")]
    pub game_type: String,
    pub limit: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GameRequestDto {
    #[serde(rename = "type")]
    pub game_type: String,
    pub limit: String,
}
