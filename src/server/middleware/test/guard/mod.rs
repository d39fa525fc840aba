//! Guard chain tests against counting collaborator doubles.
//!
//! The doubles answer from fixed fixtures and count their calls, which lets
//! the tests assert both the outcome of a chain and that a short-circuited
//! chain never reached the collaborators behind it.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    error::guard::{Denial, GuardError},
    middleware::{
        collaborator::{
            CollaboratorError, Collaborators, GameCollaborator, LeagueCollaborator,
            SessionCollaborator, TeamCollaborator,
        },
        guard::{Guard, GuardChain},
        permission::{LeaguePermissions, TeamPermissions},
    },
};

mod chain;
mod checks;
mod responses;

fn fake_failure() -> CollaboratorError {
    CollaboratorError::Database(DbErr::Custom("fake storage error".to_string()))
}

#[derive(Default)]
pub struct SessionDouble {
    user: Option<i32>,
    league: Option<i32>,
    fail: bool,
}

impl SessionDouble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: i32) -> Self {
        self.user = Some(user_id);
        self
    }

    pub fn with_league(mut self, league_id: i32) -> Self {
        self.league = Some(league_id);
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl SessionCollaborator for SessionDouble {
    async fn resolve_user(&self) -> Result<Option<i32>, CollaboratorError> {
        if self.fail {
            return Err(fake_failure());
        }
        Ok(self.user)
    }

    async fn resolve_active_league(&self) -> Result<Option<i32>, CollaboratorError> {
        if self.fail {
            return Err(fake_failure());
        }
        Ok(self.league)
    }

    async fn set_active_league(&self, _league_id: i32) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct LeagueDouble {
    permissions: LeaguePermissions,
    exists: bool,
    joinable: bool,
    calls: AtomicUsize,
}

impl LeagueDouble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permissions(mut self, permissions: LeaguePermissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn existing(mut self) -> Self {
        self.exists = true;
        self
    }

    pub fn joinable(mut self) -> Self {
        self.joinable = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LeagueCollaborator for LeagueDouble {
    async fn permissions(
        &self,
        _league_id: i32,
        _user_id: i32,
    ) -> Result<LeaguePermissions, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.permissions)
    }

    async fn exists(&self, _league_id: i32) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exists)
    }

    async fn publicly_joinable(&self, _league_id: i32) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.joinable)
    }
}

#[derive(Default)]
pub struct TeamDouble {
    permissions: TeamPermissions,
    exists: bool,
    played: bool,
    player_exists: bool,
    manager_exists: bool,
    calls: AtomicUsize,
}

impl TeamDouble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_permissions(mut self, permissions: TeamPermissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn existing(mut self) -> Self {
        self.exists = true;
        self
    }

    pub fn with_played_games(mut self) -> Self {
        self.played = true;
        self
    }

    pub fn with_player(mut self) -> Self {
        self.player_exists = true;
        self
    }

    pub fn with_manager(mut self) -> Self {
        self.manager_exists = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamCollaborator for TeamDouble {
    async fn permissions(
        &self,
        _team_id: i32,
        _user_id: i32,
    ) -> Result<TeamPermissions, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.permissions)
    }

    async fn exists(&self, _league_id: i32, _team_id: i32) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.exists)
    }

    async fn has_played_games(
        &self,
        _league_id: i32,
        _team_id: i32,
    ) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.played)
    }

    async fn player_exists(
        &self,
        _team_id: i32,
        _player_id: i32,
    ) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.player_exists)
    }

    async fn manager_exists(
        &self,
        _team_id: i32,
        _user_id: i32,
    ) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.manager_exists)
    }
}

#[derive(Default)]
pub struct GameDouble {
    exists: bool,
    can_report: bool,
    fail: bool,
    calls: AtomicUsize,
}

impl GameDouble {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn existing(mut self) -> Self {
        self.exists = true;
        self
    }

    pub fn reportable(mut self) -> Self {
        self.can_report = true;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GameCollaborator for GameDouble {
    async fn exists(&self, _game_id: i32, _league_id: i32) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(fake_failure());
        }
        Ok(self.exists)
    }

    async fn can_report(
        &self,
        _league_id: i32,
        _game_id: i32,
        _user_id: i32,
    ) -> Result<bool, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(fake_failure());
        }
        Ok(self.can_report)
    }
}

pub fn collaborators<'a>(
    sessions: &'a SessionDouble,
    leagues: &'a LeagueDouble,
    teams: &'a TeamDouble,
    games: &'a GameDouble,
) -> Collaborators<'a> {
    Collaborators {
        sessions,
        leagues,
        teams,
        games,
    }
}

/// Asserts the result is a denial with the expected code.
pub fn assert_denied<T: std::fmt::Debug>(result: Result<T, GuardError>, expected: Denial) {
    match result {
        Err(GuardError::Denied(denial)) => assert_eq!(denial, expected),
        other => panic!("expected denial {:?}, got: {:?}", expected, other),
    }
}

/// Asserts the result is a collaborator fault, not a denial.
pub fn assert_fault<T: std::fmt::Debug>(result: Result<T, GuardError>) {
    match result {
        Err(GuardError::Fault(_)) => {}
        other => panic!("expected fault, got: {:?}", other),
    }
}
