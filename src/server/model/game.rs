//! Game domain models and parameters.

use crate::model::game::{CreateGameDto, GameDto, GameReportDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub game_time: i64,
    pub complete: bool,
    pub winner_id: Option<i32>,
    pub score_team1: i32,
    pub score_team2: i32,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            team1_id: entity.team1_id,
            team2_id: entity.team2_id,
            game_time: entity.game_time,
            complete: entity.complete,
            winner_id: entity.winner_id,
            score_team1: entity.score_team1,
            score_team2: entity.score_team2,
        }
    }

    /// Converts to the wire DTO. An unreported game carries winnerId -1.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            game_time: self.game_time,
            complete: self.complete,
            winner_id: self.winner_id.unwrap_or(-1),
            score_team1: self.score_team1,
            score_team2: self.score_team2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub team1_id: i32,
    pub team2_id: i32,
    pub game_time: i64,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            team1_id: dto.team1_id,
            team2_id: dto.team2_id,
            game_time: dto.game_time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameResultParams {
    pub winner_id: i32,
    pub score_team1: i32,
    pub score_team2: i32,
}

impl GameResultParams {
    pub fn from_dto(dto: GameReportDto) -> Self {
        Self {
            winner_id: dto.winner_id,
            score_team1: dto.score_team1,
            score_team2: dto.score_team2,
        }
    }
}
