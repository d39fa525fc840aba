use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_league_table::League,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaguePermission::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaguePermission::Id))
                    .col(integer(LeaguePermission::LeagueId))
                    .col(integer(LeaguePermission::UserId))
                    .col(boolean(LeaguePermission::Administrator))
                    .col(boolean(LeaguePermission::CreateTeams))
                    .col(boolean(LeaguePermission::EditTeams))
                    .col(boolean(LeaguePermission::EditGames))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_permission_league_id")
                            .from(LeaguePermission::Table, LeaguePermission::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_permission_user_id")
                            .from(LeaguePermission::Table, LeaguePermission::UserId)
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
                    .name("idx_league_permission_league_user")
                    .table(LeaguePermission::Table)
                    .col(LeaguePermission::LeagueId)
                    .col(LeaguePermission::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaguePermission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaguePermission {
    Table,
    Id,
    LeagueId,
    UserId,
    Administrator,
    CreateTeams,
    EditTeams,
    EditGames,
}
