//! League permission factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating league permission rows with customizable flags.
///
/// All flags default to false; chain the setters to grant capabilities.
pub struct LeaguePermissionFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    user_id: i32,
    administrator: bool,
    create_teams: bool,
    edit_teams: bool,
    edit_games: bool,
}

impl<'a> LeaguePermissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, league_id: i32, user_id: i32) -> Self {
        Self {
            db,
            league_id,
            user_id,
            administrator: false,
            create_teams: false,
            edit_teams: false,
            edit_games: false,
        }
    }

    pub fn administrator(mut self, administrator: bool) -> Self {
        self.administrator = administrator;
        self
    }

    pub fn create_teams(mut self, create_teams: bool) -> Self {
        self.create_teams = create_teams;
        self
    }

    pub fn edit_teams(mut self, edit_teams: bool) -> Self {
        self.edit_teams = edit_teams;
        self
    }

    pub fn edit_games(mut self, edit_games: bool) -> Self {
        self.edit_games = edit_games;
        self
    }

    pub async fn build(self) -> Result<entity::league_permission::Model, DbErr> {
        entity::league_permission::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            user_id: ActiveValue::Set(self.user_id),
            administrator: ActiveValue::Set(self.administrator),
            create_teams: ActiveValue::Set(self.create_teams),
            edit_teams: ActiveValue::Set(self.edit_teams),
            edit_games: ActiveValue::Set(self.edit_games),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an all-false league permission row (plain membership).
pub async fn create_league_permission(
    db: &DatabaseConnection,
    league_id: i32,
    user_id: i32,
) -> Result<entity::league_permission::Model, DbErr> {
    LeaguePermissionFactory::new(db, league_id, user_id).build().await
}
