pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_league_table;
mod m20260301_000003_create_league_permission_table;
mod m20260301_000004_create_team_table;
mod m20260301_000005_create_player_table;
mod m20260301_000006_create_team_permission_table;
mod m20260302_000007_create_game_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_league_table::Migration),
            Box::new(m20260301_000003_create_league_permission_table::Migration),
            Box::new(m20260301_000004_create_team_table::Migration),
            Box::new(m20260301_000005_create_player_table::Migration),
            Box::new(m20260301_000006_create_team_permission_table::Migration),
            Box::new(m20260302_000007_create_game_table::Migration),
        ]
    }
}
