use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating a team.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInformationDto {
    pub name: String,
    pub tag: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub name: String,
    pub tag: String,
    pub description: String,
    pub wins: i32,
    pub losses: i32,
    pub icon_small: String,
    pub icon_large: String,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    /// Jersey number, in-game name, etc.
    pub game_identifier: String,
    pub external_id: Option<String>,
    pub main_roster: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInformationDto {
    pub team_id: i32,
    pub name: String,
    pub game_identifier: String,
    pub main_roster: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdateDto {
    pub team_id: i32,
    pub player_id: i32,
    pub name: String,
    pub game_identifier: String,
    pub main_roster: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRemoveDto {
    pub team_id: i32,
    pub player_id: i32,
}

/// Request body for changing a manager's permissions on a team.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPermissionChangeDto {
    pub team_id: i32,
    pub user_id: i32,
    pub administrator: bool,
    pub information: bool,
    pub players: bool,
    pub report_results: bool,
}
