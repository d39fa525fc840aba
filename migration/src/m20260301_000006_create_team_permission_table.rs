use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000004_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamPermission::Id))
                    .col(integer(TeamPermission::TeamId))
                    .col(integer(TeamPermission::UserId))
                    .col(boolean(TeamPermission::Administrator))
                    .col(boolean(TeamPermission::Information))
                    .col(boolean(TeamPermission::Players))
                    .col(boolean(TeamPermission::ReportResults))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_permission_team_id")
                            .from(TeamPermission::Table, TeamPermission::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_permission_user_id")
                            .from(TeamPermission::Table, TeamPermission::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_permission_team_user")
                    .table(TeamPermission::Table)
                    .col(TeamPermission::TeamId)
                    .col(TeamPermission::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamPermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamPermission {
    Table,
    Id,
    TeamId,
    UserId,
    Administrator,
    Information,
    Players,
    ReportResults,
}
