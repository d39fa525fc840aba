use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::LeagueId))
                    .col(string(Team::Name))
                    .col(string(Team::Tag))
                    .col(text(Team::Description))
                    .col(integer(Team::Wins).default(0))
                    .col(integer(Team::Losses).default(0))
                    .col(string(Team::IconSmall))
                    .col(string(Team::IconLarge))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_league_id")
                            .from(Team::Table, Team::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    LeagueId,
    Name,
    Tag,
    Description,
    Wins,
    Losses,
    IconSmall,
    IconLarge,
}
