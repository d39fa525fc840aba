//! Interfaces the guard chain uses to reach the outside world.
//!
//! Guards never touch storage or the session store directly; they go through
//! these traits so that request gating can be exercised in tests with
//! substitutable doubles. The live implementations are the SeaORM
//! repositories in `server::data` and the session wrapper in
//! [`super::session`]. Every method resolves to a domain answer or a
//! [`CollaboratorError`]; the chain turns the latter into a fault, keeping
//! infrastructure failures strictly separate from policy denials.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use thiserror::Error;
use tower_sessions::Session;

use crate::server::{
    data::{game::GameRepository, league::LeagueRepository, team::TeamRepository},
    middleware::{
        permission::{LeaguePermissions, TeamPermissions},
        session::ActiveSession,
    },
};

/// Unexpected failure from a collaborator (storage or session store).
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}

/// Resolves request identity: current user and active league selection.
#[async_trait]
pub trait SessionCollaborator: Sync {
    /// Currently authenticated user id, or `None` when not logged in.
    async fn resolve_user(&self) -> Result<Option<i32>, CollaboratorError>;

    /// Currently selected league id, or `None` when no league is active.
    async fn resolve_active_league(&self) -> Result<Option<i32>, CollaboratorError>;

    async fn set_active_league(&self, league_id: i32) -> Result<(), CollaboratorError>;
}

/// League lookups and league-level permission records.
#[async_trait]
pub trait LeagueCollaborator: Sync {
    /// The user's league permission record; the default record when absent.
    async fn permissions(
        &self,
        league_id: i32,
        user_id: i32,
    ) -> Result<LeaguePermissions, CollaboratorError>;

    async fn exists(&self, league_id: i32) -> Result<bool, CollaboratorError>;

    async fn publicly_joinable(&self, league_id: i32) -> Result<bool, CollaboratorError>;
}

/// Team lookups, roster lookups and team-level permission records.
#[async_trait]
pub trait TeamCollaborator: Sync {
    /// The user's team permission record; the default record when absent.
    async fn permissions(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<TeamPermissions, CollaboratorError>;

    async fn exists(&self, league_id: i32, team_id: i32) -> Result<bool, CollaboratorError>;

    /// True when the team is part of at least one scheduled or played game.
    async fn has_played_games(
        &self,
        league_id: i32,
        team_id: i32,
    ) -> Result<bool, CollaboratorError>;

    async fn player_exists(
        &self,
        team_id: i32,
        player_id: i32,
    ) -> Result<bool, CollaboratorError>;

    async fn manager_exists(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<bool, CollaboratorError>;
}

/// Game lookups and the combined report-result permission check.
#[async_trait]
pub trait GameCollaborator: Sync {
    async fn exists(&self, game_id: i32, league_id: i32) -> Result<bool, CollaboratorError>;

    /// Union of league schedule rights and either team's report rights.
    async fn can_report(
        &self,
        league_id: i32,
        game_id: i32,
        user_id: i32,
    ) -> Result<bool, CollaboratorError>;
}

/// The collaborator set one guard chain evaluates against.
pub struct Collaborators<'a> {
    pub sessions: &'a dyn SessionCollaborator,
    pub leagues: &'a dyn LeagueCollaborator,
    pub teams: &'a dyn TeamCollaborator,
    pub games: &'a dyn GameCollaborator,
}

/// Owns the production collaborator implementations for one request.
///
/// Controllers build one of these from the shared state and the request's
/// session, then borrow a [`Collaborators`] view for the guard chain and any
/// handler-side checks.
pub struct LiveCollaborators<'a> {
    sessions: ActiveSession<'a>,
    leagues: LeagueRepository<'a>,
    teams: TeamRepository<'a>,
    games: GameRepository<'a>,
}

impl<'a> LiveCollaborators<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self {
            sessions: ActiveSession::new(session),
            leagues: LeagueRepository::new(db),
            teams: TeamRepository::new(db),
            games: GameRepository::new(db),
        }
    }

    pub fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            sessions: &self.sessions,
            leagues: &self.leagues,
            teams: &self.teams,
            games: &self.games,
        }
    }
}
