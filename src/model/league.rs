use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRequestDto {
    pub name: String,
    pub description: String,
    pub public_view: bool,
    pub public_join: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeagueInformationDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// League description rendered from markdown to HTML.
    pub description_html: String,
    pub public_view: bool,
    pub public_join: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicLeagueDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub public_join: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub id: i32,
    pub name: String,
    pub tag: String,
    pub wins: i32,
    pub losses: i32,
    pub icon_small: String,
    pub icon_large: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamManagersDto {
    pub team_id: i32,
    pub team_name: String,
    pub team_tag: String,
    pub managers: Vec<ManagerDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDto {
    pub user_id: i32,
    pub user_email: String,
    pub administrator: bool,
    pub information: bool,
    pub players: bool,
    pub report_results: bool,
}

/// Request body for changing a user's permissions in the active league.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaguePermissionChangeDto {
    /// Id of the user whose permissions are being changed.
    pub id: i32,
    pub administrator: bool,
    pub create_teams: bool,
    pub edit_teams: bool,
    pub edit_games: bool,
}
