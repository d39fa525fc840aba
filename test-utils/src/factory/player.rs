//! Player factory for creating test roster entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test players with customizable fields.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    name: String,
    game_identifier: String,
    external_id: Option<String>,
    main_roster: bool,
}

impl<'a> PlayerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, team_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            team_id,
            name: format!("Player {}", id),
            game_identifier: format!("ign{}", id),
            external_id: None,
            main_roster: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn game_identifier(mut self, game_identifier: impl Into<String>) -> Self {
        self.game_identifier = game_identifier.into();
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    pub fn main_roster(mut self, main_roster: bool) -> Self {
        self.main_roster = main_roster;
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            team_id: ActiveValue::Set(self.team_id),
            name: ActiveValue::Set(self.name),
            game_identifier: ActiveValue::Set(self.game_identifier),
            external_id: ActiveValue::Set(self.external_id),
            main_roster: ActiveValue::Set(self.main_roster),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values on the given team.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, team_id).build().await
}
