//! Player roster repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::team::{NewPlayerParams, UpdatePlayerParams};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a player to a team's roster.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created player
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, params: NewPlayerParams) -> Result<i32, DbErr> {
        let player = entity::player::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            name: ActiveValue::Set(params.name),
            game_identifier: ActiveValue::Set(params.game_identifier),
            external_id: ActiveValue::Set(params.external_id),
            main_roster: ActiveValue::Set(params.main_roster),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(player.id)
    }

    pub async fn update(&self, params: UpdatePlayerParams) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(params.player_id))
            .filter(entity::player::Column::TeamId.eq(params.team_id))
            .col_expr(
                entity::player::Column::Name,
                sea_orm::sea_query::Expr::value(params.name),
            )
            .col_expr(
                entity::player::Column::GameIdentifier,
                sea_orm::sea_query::Expr::value(params.game_identifier),
            )
            .col_expr(
                entity::player::Column::MainRoster,
                sea_orm::sea_query::Expr::value(params.main_roster),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn remove(&self, team_id: i32, player_id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::delete_many()
            .filter(entity::player::Column::Id.eq(player_id))
            .filter(entity::player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn exists(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.eq(player_id))
            .filter(entity::player::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks league-wide game identifier uniqueness, optionally excluding
    /// one player (updates). The scope is the whole league, not one team.
    pub async fn is_game_identifier_in_use(
        &self,
        league_id: i32,
        excluded_player_id: Option<i32>,
        game_identifier: &str,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Player::find()
            .inner_join(entity::prelude::Team)
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .filter(entity::player::Column::GameIdentifier.eq(game_identifier));

        if let Some(player_id) = excluded_player_id {
            query = query.filter(entity::player::Column::Id.ne(player_id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
