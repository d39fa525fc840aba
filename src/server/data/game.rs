//! Game repository: scheduling, lookups and result reporting.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::{
    data::{league_permission::LeaguePermissionRepository, team_permission::TeamPermissionRepository},
    middleware::{
        collaborator::{CollaboratorError, GameCollaborator},
        permission::Capability,
    },
    model::game::{CreateGameParams, Game, GameResultParams},
};

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules a new game.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created game
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        league_id: i32,
        params: CreateGameParams,
    ) -> Result<i32, DbErr> {
        let game = entity::game::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            team1_id: ActiveValue::Set(params.team1_id),
            team2_id: ActiveValue::Set(params.team2_id),
            game_time: ActiveValue::Set(params.game_time),
            complete: ActiveValue::Set(false),
            winner_id: ActiveValue::Set(None),
            score_team1: ActiveValue::Set(0),
            score_team2: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(game.id)
    }

    pub async fn find(&self, game_id: i32, league_id: i32) -> Result<Option<Game>, DbErr> {
        let game = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.eq(game_id))
            .filter(entity::game::Column::LeagueId.eq(league_id))
            .one(self.db)
            .await?;

        Ok(game.map(Game::from_entity))
    }

    pub async fn game_exists(&self, game_id: i32, league_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::Id.eq(game_id))
            .filter(entity::game::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// True when either team already has a game at the given time.
    pub async fn has_conflict(
        &self,
        team1_id: i32,
        team2_id: i32,
        game_time: i64,
        excluded_game_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Game::find()
            .filter(entity::game::Column::GameTime.eq(game_time))
            .filter(
                Condition::any()
                    .add(entity::game::Column::Team1Id.is_in([team1_id, team2_id]))
                    .add(entity::game::Column::Team2Id.is_in([team1_id, team2_id])),
            );

        if let Some(game_id) = excluded_game_id {
            query = query.filter(entity::game::Column::Id.ne(game_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Records a result, marking the game complete.
    pub async fn report(&self, game_id: i32, result: GameResultParams) -> Result<(), DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Unchanged(game_id),
            complete: ActiveValue::Set(true),
            winner_id: ActiveValue::Set(Some(result.winner_id)),
            score_team1: ActiveValue::Set(result.score_team1),
            score_team2: ActiveValue::Set(result.score_team2),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn reschedule(&self, game_id: i32, game_time: i64) -> Result<(), DbErr> {
        entity::game::ActiveModel {
            id: ActiveValue::Unchanged(game_id),
            game_time: ActiveValue::Set(game_time),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, game_id: i32, league_id: i32) -> Result<(), DbErr> {
        entity::prelude::Game::delete_many()
            .filter(entity::game::Column::Id.eq(game_id))
            .filter(entity::game::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Report-result permission: league schedule rights, or report rights on
    /// either participating team. A game outside the league yields false.
    pub async fn has_report_permission(
        &self,
        league_id: i32,
        game_id: i32,
        user_id: i32,
    ) -> Result<bool, DbErr> {
        let league = LeaguePermissionRepository::new(self.db)
            .get(league_id, user_id)
            .await?;

        if league.administrator || league.edit_games {
            return Ok(true);
        }

        let Some(game) = self.find(game_id, league_id).await? else {
            return Ok(false);
        };

        let team_permissions = TeamPermissionRepository::new(self.db);
        for team_id in [game.team1_id, game.team2_id] {
            let team = team_permissions.get(team_id, user_id).await?;
            if Capability::ReportResult.granted_by(&league, &team) {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

#[async_trait]
impl GameCollaborator for GameRepository<'_> {
    async fn exists(&self, game_id: i32, league_id: i32) -> Result<bool, CollaboratorError> {
        Ok(self.game_exists(game_id, league_id).await?)
    }

    async fn can_report(
        &self,
        league_id: i32,
        game_id: i32,
        user_id: i32,
    ) -> Result<bool, CollaboratorError> {
        Ok(self
            .has_report_permission(league_id, game_id, user_id)
            .await?)
    }
}
