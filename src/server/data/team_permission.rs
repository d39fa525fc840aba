//! Team permission record repository.
//!
//! Same absence-equals-default rule as the league permission records.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::middleware::permission::TeamPermissions;

pub struct TeamPermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamPermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's permission record on a team, defaulting on absence.
    pub async fn get(&self, team_id: i32, user_id: i32) -> Result<TeamPermissions, DbErr> {
        let row = entity::prelude::TeamPermission::find()
            .filter(entity::team_permission::Column::TeamId.eq(team_id))
            .filter(entity::team_permission::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(row
            .map(|p| TeamPermissions {
                administrator: p.administrator,
                information: p.information,
                players: p.players,
                report_results: p.report_results,
            })
            .unwrap_or_default())
    }

    /// Upserts the user's permission record on a team.
    pub async fn set(
        &self,
        team_id: i32,
        user_id: i32,
        permissions: TeamPermissions,
    ) -> Result<(), DbErr> {
        entity::prelude::TeamPermission::insert(entity::team_permission::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            administrator: ActiveValue::Set(permissions.administrator),
            information: ActiveValue::Set(permissions.information),
            players: ActiveValue::Set(permissions.players),
            report_results: ActiveValue::Set(permissions.report_results),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::team_permission::Column::TeamId,
                entity::team_permission::Column::UserId,
            ])
            .update_columns([
                entity::team_permission::Column::Administrator,
                entity::team_permission::Column::Information,
                entity::team_permission::Column::Players,
                entity::team_permission::Column::ReportResults,
            ])
            .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// True when the user has a manager row on the team.
    pub async fn exists(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamPermission::find()
            .filter(entity::team_permission::Column::TeamId.eq(team_id))
            .filter(entity::team_permission::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
