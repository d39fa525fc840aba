use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    pub team1_id: i32,
    pub team2_id: i32,
    /// Unix epoch time in seconds when the game is played.
    pub game_time: i64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub game_time: i64,
    pub complete: bool,
    /// Id of the winning team, or -1 if the game is not complete.
    pub winner_id: i32,
    pub score_team1: i32,
    pub score_team2: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameReportDto {
    pub winner_id: i32,
    pub score_team1: i32,
    pub score_team2: i32,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleGameDto {
    pub game_time: i64,
}
