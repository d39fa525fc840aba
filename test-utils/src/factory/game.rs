//! Game factory for creating test game entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test games with customizable fields.
///
/// Defaults to an unreported game at a unique future-ish timestamp.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    team1_id: i32,
    team2_id: i32,
    game_time: i64,
    complete: bool,
    winner_id: Option<i32>,
    score_team1: i32,
    score_team2: i32,
}

impl<'a> GameFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, league_id: i32, team1_id: i32, team2_id: i32) -> Self {
        Self {
            db,
            league_id,
            team1_id,
            team2_id,
            game_time: 1_900_000_000 + next_id() as i64,
            complete: false,
            winner_id: None,
            score_team1: 0,
            score_team2: 0,
        }
    }

    pub fn game_time(mut self, game_time: i64) -> Self {
        self.game_time = game_time;
        self
    }

    pub fn completed(mut self, winner_id: i32, score_team1: i32, score_team2: i32) -> Self {
        self.complete = true;
        self.winner_id = Some(winner_id);
        self.score_team1 = score_team1;
        self.score_team2 = score_team2;
        self
    }

    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            team1_id: ActiveValue::Set(self.team1_id),
            team2_id: ActiveValue::Set(self.team2_id),
            game_time: ActiveValue::Set(self.game_time),
            complete: ActiveValue::Set(self.complete),
            winner_id: ActiveValue::Set(self.winner_id),
            score_team1: ActiveValue::Set(self.score_team1),
            score_team2: ActiveValue::Set(self.score_team2),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unreported game between two teams.
pub async fn create_game(
    db: &DatabaseConnection,
    league_id: i32,
    team1_id: i32,
    team2_id: i32,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db, league_id, team1_id, team2_id).build().await
}
