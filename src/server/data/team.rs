//! Team repository: team rows, rosters, and the generic icon bookkeeping.

use async_trait::async_trait;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{player::PlayerRepository, team_permission::TeamPermissionRepository},
    middleware::{
        collaborator::{CollaboratorError, TeamCollaborator},
        permission::TeamPermissions,
    },
    model::team::{Team, TeamFields},
};

/// Number of bundled generic icon pairs (`generic-N-small.png` / `-large.png`).
const GENERIC_ICON_COUNT: i32 = 9;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Picks a generic icon pair not yet used by a team in this league.
    ///
    /// Prefers an unused slot; when all nine are taken, any slot is reused.
    async fn unused_generic_icon(&self, league_id: i32) -> Result<(String, String), DbErr> {
        let used: Vec<String> = entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .select_only()
            .column(entity::team::Column::IconSmall)
            .into_tuple()
            .all(self.db)
            .await?;

        let available: Vec<i32> = (1..=GENERIC_ICON_COUNT)
            .filter(|n| !used.iter().any(|icon| icon == &format!("generic-{n}-small.png")))
            .collect();

        let number = if available.is_empty() {
            rand::rng().random_range(1..=GENERIC_ICON_COUNT)
        } else {
            available[rand::rng().random_range(0..available.len())]
        };

        Ok((
            format!("generic-{number}-small.png"),
            format!("generic-{number}-large.png"),
        ))
    }

    /// Creates a team and makes the creator its administrator.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created team
    /// - `Err(DbErr)` - Database error during any insert
    pub async fn create(
        &self,
        league_id: i32,
        user_id: i32,
        fields: TeamFields,
    ) -> Result<i32, DbErr> {
        let (icon_small, icon_large) = self.unused_generic_icon(league_id).await?;

        let team = entity::team::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            name: ActiveValue::Set(fields.name),
            tag: ActiveValue::Set(fields.tag),
            description: ActiveValue::Set(fields.description),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            icon_small: ActiveValue::Set(icon_small),
            icon_large: ActiveValue::Set(icon_large),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TeamPermissionRepository::new(self.db)
            .set(
                team.id,
                user_id,
                TeamPermissions {
                    administrator: true,
                    information: true,
                    players: true,
                    report_results: true,
                },
            )
            .await?;

        Ok(team.id)
    }

    pub async fn update(
        &self,
        league_id: i32,
        team_id: i32,
        fields: TeamFields,
    ) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .col_expr(
                entity::team::Column::Name,
                sea_orm::sea_query::Expr::value(fields.name),
            )
            .col_expr(
                entity::team::Column::Tag,
                sea_orm::sea_query::Expr::value(fields.tag),
            )
            .col_expr(
                entity::team::Column::Description,
                sea_orm::sea_query::Expr::value(fields.description),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Removes the team, its roster and its manager records.
    pub async fn delete(&self, league_id: i32, team_id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::delete_many()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        entity::prelude::TeamPermission::delete_many()
            .filter(entity::team_permission::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        entity::prelude::Team::delete_many()
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn team_exists(&self, league_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn is_name_in_use(
        &self,
        league_id: i32,
        excluded_team_id: Option<i32>,
        name: &str,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .filter(entity::team::Column::Name.eq(name));

        if let Some(team_id) = excluded_team_id {
            query = query.filter(entity::team::Column::Id.ne(team_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn is_tag_in_use(
        &self,
        league_id: i32,
        excluded_team_id: Option<i32>,
        tag: &str,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .filter(entity::team::Column::Tag.eq(tag));

        if let Some(team_id) = excluded_team_id {
            query = query.filter(entity::team::Column::Id.ne(team_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Full team information with the roster, or `None` when absent.
    pub async fn information(
        &self,
        league_id: i32,
        team_id: i32,
    ) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team.id))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Team::from_entity(team, players)))
    }

    /// True when the team appears in any game of the league.
    pub async fn team_has_played_games(
        &self,
        league_id: i32,
        team_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Game::find()
            .filter(entity::game::Column::LeagueId.eq(league_id))
            .filter(
                Condition::any()
                    .add(entity::game::Column::Team1Id.eq(team_id))
                    .add(entity::game::Column::Team2Id.eq(team_id)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies a win/loss tally change after a result is recorded or amended.
    pub async fn adjust_record(
        &self,
        team_id: i32,
        wins_delta: i32,
        losses_delta: i32,
    ) -> Result<(), DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(team_id).one(self.db).await? else {
            return Ok(());
        };

        entity::team::ActiveModel {
            id: ActiveValue::Unchanged(team.id),
            wins: ActiveValue::Set(team.wins + wins_delta),
            losses: ActiveValue::Set(team.losses + losses_delta),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl TeamCollaborator for TeamRepository<'_> {
    async fn permissions(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<TeamPermissions, CollaboratorError> {
        let permissions = TeamPermissionRepository::new(self.db)
            .get(team_id, user_id)
            .await?;
        Ok(permissions)
    }

    async fn exists(&self, league_id: i32, team_id: i32) -> Result<bool, CollaboratorError> {
        Ok(self.team_exists(league_id, team_id).await?)
    }

    async fn has_played_games(
        &self,
        league_id: i32,
        team_id: i32,
    ) -> Result<bool, CollaboratorError> {
        Ok(self.team_has_played_games(league_id, team_id).await?)
    }

    async fn player_exists(
        &self,
        team_id: i32,
        player_id: i32,
    ) -> Result<bool, CollaboratorError> {
        Ok(PlayerRepository::new(self.db)
            .exists(team_id, player_id)
            .await?)
    }

    async fn manager_exists(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<bool, CollaboratorError> {
        Ok(TeamPermissionRepository::new(self.db)
            .exists(team_id, user_id)
            .await?)
    }
}
