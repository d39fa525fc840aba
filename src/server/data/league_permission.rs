//! League permission record repository.
//!
//! A (league, user) pair has at most one row. Reads fall back to the
//! default all-false record when the row is absent; that is the normal
//! "no special permissions" state, not an error.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::middleware::permission::LeaguePermissions;

pub struct LeaguePermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaguePermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's permission record in a league, defaulting on absence.
    pub async fn get(
        &self,
        league_id: i32,
        user_id: i32,
    ) -> Result<LeaguePermissions, DbErr> {
        let row = entity::prelude::LeaguePermission::find()
            .filter(entity::league_permission::Column::LeagueId.eq(league_id))
            .filter(entity::league_permission::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(row
            .map(|p| LeaguePermissions {
                administrator: p.administrator,
                create_teams: p.create_teams,
                edit_teams: p.edit_teams,
                edit_games: p.edit_games,
            })
            .unwrap_or_default())
    }

    /// Upserts the user's permission record in a league.
    pub async fn set(
        &self,
        league_id: i32,
        user_id: i32,
        permissions: LeaguePermissions,
    ) -> Result<(), DbErr> {
        entity::prelude::LeaguePermission::insert(entity::league_permission::ActiveModel {
            league_id: ActiveValue::Set(league_id),
            user_id: ActiveValue::Set(user_id),
            administrator: ActiveValue::Set(permissions.administrator),
            create_teams: ActiveValue::Set(permissions.create_teams),
            edit_teams: ActiveValue::Set(permissions.edit_teams),
            edit_games: ActiveValue::Set(permissions.edit_games),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::league_permission::Column::LeagueId,
                entity::league_permission::Column::UserId,
            ])
            .update_columns([
                entity::league_permission::Column::Administrator,
                entity::league_permission::Column::CreateTeams,
                entity::league_permission::Column::EditTeams,
                entity::league_permission::Column::EditGames,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
