//! League repository: league rows, membership, and league-wide summaries.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::league_permission::LeaguePermissionRepository,
    middleware::{
        collaborator::{CollaboratorError, LeagueCollaborator},
        permission::LeaguePermissions,
    },
    model::{
        game::Game,
        league::{LeagueInformation, LeagueParams, ManagerSummary, PublicLeague, TeamManagers, TeamSummary},
    },
};

pub struct LeagueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a league and grants the creator the full permission record.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the created league
    /// - `Err(DbErr)` - Database error during either insert
    pub async fn create(&self, user_id: i32, params: LeagueParams) -> Result<i32, DbErr> {
        let league = entity::league::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            public_view: ActiveValue::Set(params.public_view),
            public_join: ActiveValue::Set(params.public_join),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        LeaguePermissionRepository::new(self.db)
            .set(
                league.id,
                user_id,
                LeaguePermissions {
                    administrator: true,
                    create_teams: true,
                    edit_teams: true,
                    edit_games: true,
                },
            )
            .await?;

        Ok(league.id)
    }

    pub async fn update(&self, league_id: i32, params: LeagueParams) -> Result<(), DbErr> {
        entity::league::ActiveModel {
            id: ActiveValue::Unchanged(league_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            public_view: ActiveValue::Set(params.public_view),
            public_join: ActiveValue::Set(params.public_join),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Checks league name uniqueness, optionally excluding one league (updates).
    pub async fn is_name_in_use(
        &self,
        excluded_league_id: Option<i32>,
        name: &str,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::League::find()
            .filter(entity::league::Column::Name.eq(name));

        if let Some(league_id) = excluded_league_id {
            query = query.filter(entity::league::Column::Id.ne(league_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn information(&self, league_id: i32) -> Result<Option<LeagueInformation>, DbErr> {
        let league = entity::prelude::League::find_by_id(league_id)
            .one(self.db)
            .await?;

        Ok(league.map(LeagueInformation::from_entity))
    }

    pub async fn league_exists(&self, league_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::League::find_by_id(league_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// A league is viewable when public, or when the user holds any
    /// permission row in it (members can always see their league).
    pub async fn is_viewable(
        &self,
        league_id: i32,
        user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let Some(league) = entity::prelude::League::find_by_id(league_id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        if league.public_view {
            return Ok(true);
        }

        let Some(user_id) = user_id else {
            return Ok(false);
        };

        let member_count = entity::prelude::LeaguePermission::find()
            .filter(entity::league_permission::Column::LeagueId.eq(league_id))
            .filter(entity::league_permission::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(member_count > 0)
    }

    pub async fn is_publicly_joinable(&self, league_id: i32) -> Result<bool, DbErr> {
        let league = entity::prelude::League::find_by_id(league_id)
            .one(self.db)
            .await?;

        Ok(league.map(|l| l.public_join).unwrap_or(false))
    }

    /// Adds the user as a league member with the default permission record.
    ///
    /// Joining twice is a no-op; the existing record is left untouched.
    pub async fn join(&self, league_id: i32, user_id: i32) -> Result<(), DbErr> {
        use migration::OnConflict;

        let result = entity::prelude::LeaguePermission::insert(
            entity::league_permission::ActiveModel {
                league_id: ActiveValue::Set(league_id),
                user_id: ActiveValue::Set(user_id),
                administrator: ActiveValue::Set(false),
                create_teams: ActiveValue::Set(false),
                edit_teams: ActiveValue::Set(false),
                edit_games: ActiveValue::Set(false),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::columns([
                entity::league_permission::Column::LeagueId,
                entity::league_permission::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(self.db)
        .await;

        match result {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub async fn public_leagues(&self) -> Result<Vec<PublicLeague>, DbErr> {
        let leagues = entity::prelude::League::find()
            .filter(entity::league::Column::PublicView.eq(true))
            .order_by_asc(entity::league::Column::Name)
            .all(self.db)
            .await?;

        Ok(leagues.into_iter().map(PublicLeague::from_entity).collect())
    }

    /// League standings, best record first.
    pub async fn team_summary(&self, league_id: i32) -> Result<Vec<TeamSummary>, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .order_by_desc(entity::team::Column::Wins)
            .order_by_asc(entity::team::Column::Losses)
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(TeamSummary::from_entity).collect())
    }

    /// All games of the league in chronological order.
    pub async fn game_summary(&self, league_id: i32) -> Result<Vec<Game>, DbErr> {
        let games = entity::prelude::Game::find()
            .filter(entity::game::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::game::Column::GameTime)
            .all(self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }

    /// Every team of the league with its managers and their permission flags.
    pub async fn team_managers(&self, league_id: i32) -> Result<Vec<TeamManagers>, DbErr> {
        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        let mut summaries = Vec::with_capacity(teams.len());
        for team in teams {
            let rows = entity::prelude::TeamPermission::find()
                .filter(entity::team_permission::Column::TeamId.eq(team.id))
                .find_also_related(entity::prelude::User)
                .all(self.db)
                .await?;

            let managers = rows
                .into_iter()
                .filter_map(|(permission, user)| {
                    user.map(|user| ManagerSummary {
                        user_id: user.id,
                        user_email: user.email,
                        administrator: permission.administrator,
                        information: permission.information,
                        players: permission.players,
                        report_results: permission.report_results,
                    })
                })
                .collect();

            summaries.push(TeamManagers {
                team_id: team.id,
                team_name: team.name,
                team_tag: team.tag,
                managers,
            });
        }

        Ok(summaries)
    }
}

#[async_trait]
impl LeagueCollaborator for LeagueRepository<'_> {
    async fn permissions(
        &self,
        league_id: i32,
        user_id: i32,
    ) -> Result<LeaguePermissions, CollaboratorError> {
        let permissions = LeaguePermissionRepository::new(self.db)
            .get(league_id, user_id)
            .await?;
        Ok(permissions)
    }

    async fn exists(&self, league_id: i32) -> Result<bool, CollaboratorError> {
        Ok(self.league_exists(league_id).await?)
    }

    async fn publicly_joinable(&self, league_id: i32) -> Result<bool, CollaboratorError> {
        Ok(self.is_publicly_joinable(league_id).await?)
    }
}
