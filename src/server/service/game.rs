//! Game scheduling and result reporting logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, team::TeamRepository},
    error::{guard::Denial, AppError},
    model::game::{CreateGameParams, Game, GameResultParams},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a game after checking neither team is already booked at
    /// that time.
    pub async fn schedule(
        &self,
        league_id: i32,
        params: CreateGameParams,
    ) -> Result<i32, AppError> {
        let games = GameRepository::new(self.db);

        if games
            .has_conflict(params.team1_id, params.team2_id, params.game_time, None)
            .await?
        {
            return Err(Denial::ConflictExists.into());
        }

        let game_id = games.create(league_id, params).await?;
        Ok(game_id)
    }

    pub async fn information(
        &self,
        league_id: i32,
        game_id: i32,
    ) -> Result<Option<Game>, AppError> {
        let game = GameRepository::new(self.db).find(game_id, league_id).await?;
        Ok(game)
    }

    /// Records a result and keeps the team win/loss tallies consistent.
    ///
    /// The winner must be one of the two participants. Re-reporting a
    /// completed game first backs out the previously tallied result.
    pub async fn report(
        &self,
        league_id: i32,
        game_id: i32,
        result: GameResultParams,
    ) -> Result<(), AppError> {
        let games = GameRepository::new(self.db);
        let teams = TeamRepository::new(self.db);

        let Some(game) = games.find(game_id, league_id).await? else {
            return Err(Denial::GameDoesNotExist.into());
        };

        if result.winner_id != game.team1_id && result.winner_id != game.team2_id {
            return Err(Denial::WinnerIdDoesNotMatch.into());
        }

        if game.complete {
            if let Some(previous_winner) = game.winner_id {
                let previous_loser = if previous_winner == game.team1_id {
                    game.team2_id
                } else {
                    game.team1_id
                };
                teams.adjust_record(previous_winner, -1, 0).await?;
                teams.adjust_record(previous_loser, 0, -1).await?;
            }
        }

        let loser_id = if result.winner_id == game.team1_id {
            game.team2_id
        } else {
            game.team1_id
        };
        let winner_id = result.winner_id;

        games.report(game_id, result).await?;
        teams.adjust_record(winner_id, 1, 0).await?;
        teams.adjust_record(loser_id, 0, 1).await?;

        Ok(())
    }

    /// Moves a game to a new time after re-checking schedule conflicts.
    pub async fn reschedule(
        &self,
        league_id: i32,
        game_id: i32,
        game_time: i64,
    ) -> Result<(), AppError> {
        let games = GameRepository::new(self.db);

        let Some(game) = games.find(game_id, league_id).await? else {
            return Err(Denial::GameDoesNotExist.into());
        };

        if games
            .has_conflict(game.team1_id, game.team2_id, game_time, Some(game_id))
            .await?
        {
            return Err(Denial::ConflictExists.into());
        }

        games.reschedule(game_id, game_time).await?;
        Ok(())
    }
}
