use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub day: String,
    pub time: String,
    pub description: Option<String>,
    pub games: Vec<ScheduleGameDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGameDto {
    pub id: String,
    pub schedule_id: String,
    pub game_type: String,
    pub limit: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGameInputDto {
    pub game_type: String,
    pub limit: String,
}

/// Payload for creating a schedule or replacing an existing one.
///
/// On update, `games` replaces the schedule's whole game list.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequestDto {
    pub day: String,
    pub time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub games: Vec<ScheduleGameInputDto>,
}
