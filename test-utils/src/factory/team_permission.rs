//! Team permission factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating team permission rows with customizable flags.
///
/// All flags default to false; chain the setters to grant capabilities.
pub struct TeamPermissionFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    user_id: i32,
    administrator: bool,
    information: bool,
    players: bool,
    report_results: bool,
}

impl<'a> TeamPermissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_id: i32, user_id: i32) -> Self {
        Self {
            db,
            team_id,
            user_id,
            administrator: false,
            information: false,
            players: false,
            report_results: false,
        }
    }

    pub fn administrator(mut self, administrator: bool) -> Self {
        self.administrator = administrator;
        self
    }

    pub fn information(mut self, information: bool) -> Self {
        self.information = information;
        self
    }

    pub fn players(mut self, players: bool) -> Self {
        self.players = players;
        self
    }

    pub fn report_results(mut self, report_results: bool) -> Self {
        self.report_results = report_results;
        self
    }

    pub async fn build(self) -> Result<entity::team_permission::Model, DbErr> {
        entity::team_permission::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            administrator: ActiveValue::Set(self.administrator),
            information: ActiveValue::Set(self.information),
            players: ActiveValue::Set(self.players),
            report_results: ActiveValue::Set(self.report_results),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an all-false team permission row (plain manager membership).
pub async fn create_team_permission(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_permission::Model, DbErr> {
    TeamPermissionFactory::new(db, team_id, user_id).build().await
}
