use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League, m20260301_000004_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(integer(Game::LeagueId))
                    .col(integer(Game::Team1Id))
                    .col(integer(Game::Team2Id))
                    .col(big_integer(Game::GameTime))
                    .col(boolean(Game::Complete).default(false))
                    .col(integer_null(Game::WinnerId))
                    .col(integer(Game::ScoreTeam1).default(0))
                    .col(integer(Game::ScoreTeam2).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_league_id")
                            .from(Game::Table, Game::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_team1_id")
                            .from(Game::Table, Game::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_team2_id")
                            .from(Game::Table, Game::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    LeagueId,
    Team1Id,
    Team2Id,
    GameTime,
    Complete,
    WinnerId,
    ScoreTeam1,
    ScoreTeam2,
}
