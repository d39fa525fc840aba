//! Team factory for creating test team entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test teams with customizable fields.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    name: String,
    tag: String,
    description: String,
    wins: i32,
    losses: i32,
}

impl<'a> TeamFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, league_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            league_id,
            name: format!("Team {}", id),
            tag: format!("T{}", id % 1000),
            description: String::new(),
            wins: 0,
            losses: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn record(mut self, wins: i32, losses: i32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            league_id: ActiveValue::Set(self.league_id),
            name: ActiveValue::Set(self.name),
            tag: ActiveValue::Set(self.tag),
            description: ActiveValue::Set(self.description),
            wins: ActiveValue::Set(self.wins),
            losses: ActiveValue::Set(self.losses),
            icon_small: ActiveValue::Set("generic-1-small.png".to_string()),
            icon_large: ActiveValue::Set("generic-1-large.png".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values in the given league.
pub async fn create_team(
    db: &DatabaseConnection,
    league_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, league_id).build().await
}
