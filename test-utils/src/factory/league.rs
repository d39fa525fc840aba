//! League factory for creating test league entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test leagues with customizable fields.
///
/// Defaults: a unique name, empty description, publicly viewable and
/// publicly joinable.
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    public_view: bool,
    public_join: bool,
}

impl<'a> LeagueFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("League {}", id),
            description: String::new(),
            public_view: true,
            public_join: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn public_view(mut self, public_view: bool) -> Self {
        self.public_view = public_view;
        self
    }

    pub fn public_join(mut self, public_join: bool) -> Self {
        self.public_join = public_join;
        self
    }

    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            public_view: ActiveValue::Set(self.public_view),
            public_join: ActiveValue::Set(self.public_join),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values.
pub async fn create_league(db: &DatabaseConnection) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db).build().await
}
