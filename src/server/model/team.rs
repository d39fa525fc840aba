//! Team and player domain models and parameters.

use crate::model::team::{
    PlayerDto, PlayerInformationDto, PlayerUpdateDto, TeamDto, TeamInformationDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub game_identifier: String,
    pub external_id: Option<String>,
    pub main_roster: bool,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game_identifier: entity.game_identifier,
            external_id: entity.external_id,
            main_roster: entity.main_roster,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            game_identifier: self.game_identifier,
            external_id: self.external_id,
            main_roster: self.main_roster,
        }
    }
}

/// Full team information including the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub tag: String,
    pub description: String,
    pub wins: i32,
    pub losses: i32,
    pub icon_small: String,
    pub icon_large: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn from_entity(
        entity: entity::team::Model,
        players: Vec<entity::player::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tag: entity.tag,
            description: entity.description,
            wins: entity.wins,
            losses: entity.losses,
            icon_small: entity.icon_small,
            icon_large: entity.icon_large,
            players: players.into_iter().map(Player::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            name: self.name,
            tag: self.tag,
            description: self.description,
            wins: self.wins,
            losses: self.losses,
            icon_small: self.icon_small,
            icon_large: self.icon_large,
            players: self.players.into_iter().map(|p| p.into_dto()).collect(),
        }
    }
}

/// Fields for creating or updating a team.
#[derive(Debug, Clone)]
pub struct TeamFields {
    pub name: String,
    pub tag: String,
    pub description: String,
}

impl TeamFields {
    pub fn from_dto(dto: TeamInformationDto) -> Self {
        Self {
            name: dto.name,
            tag: dto.tag,
            description: dto.description,
        }
    }
}

/// Parameters for adding a player to a team's roster.
#[derive(Debug, Clone)]
pub struct NewPlayerParams {
    pub team_id: i32,
    pub name: String,
    pub game_identifier: String,
    pub external_id: Option<String>,
    pub main_roster: bool,
}

impl NewPlayerParams {
    pub fn from_dto(dto: PlayerInformationDto) -> Self {
        Self {
            team_id: dto.team_id,
            name: dto.name,
            game_identifier: dto.game_identifier,
            external_id: None,
            main_roster: dto.main_roster,
        }
    }
}

/// Parameters for updating an existing player.
#[derive(Debug, Clone)]
pub struct UpdatePlayerParams {
    pub team_id: i32,
    pub player_id: i32,
    pub name: String,
    pub game_identifier: String,
    pub main_roster: bool,
}

impl UpdatePlayerParams {
    pub fn from_dto(dto: PlayerUpdateDto) -> Self {
        Self {
            team_id: dto.team_id,
            player_id: dto.player_id,
            name: dto.name,
            game_identifier: dto.game_identifier,
            main_roster: dto.main_roster,
        }
    }
}
