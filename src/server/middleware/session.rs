//! Type-safe wrapper around the tower-sessions session.
//!
//! Centralizes the session keys for the authenticated user and the active
//! league selection so controllers and guards never touch raw string keys.

use async_trait::async_trait;
use tower_sessions::Session;

use crate::server::middleware::collaborator::{CollaboratorError, SessionCollaborator};

const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_ACTIVE_LEAGUE_ID: &str = "auth:league";

/// Session state for one request: login identity and active league.
pub struct ActiveSession<'a> {
    session: &'a Session,
}

impl<'a> ActiveSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user id after a successful login.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), CollaboratorError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Id of the logged-in user, or `None` when the session is anonymous.
    pub async fn user_id(&self) -> Result<Option<i32>, CollaboratorError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    pub async fn set_active_league_id(&self, league_id: i32) -> Result<(), CollaboratorError> {
        self.session
            .insert(SESSION_ACTIVE_LEAGUE_ID, league_id)
            .await?;
        Ok(())
    }

    /// Id of the selected league, or `None` when no league is active.
    pub async fn active_league_id(&self) -> Result<Option<i32>, CollaboratorError> {
        let league_id = self.session.get::<i32>(SESSION_ACTIVE_LEAGUE_ID).await?;
        Ok(league_id)
    }

    /// Clears all session data on logout, including the active league.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

#[async_trait]
impl SessionCollaborator for ActiveSession<'_> {
    async fn resolve_user(&self) -> Result<Option<i32>, CollaboratorError> {
        self.user_id().await
    }

    async fn resolve_active_league(&self) -> Result<Option<i32>, CollaboratorError> {
        self.active_league_id().await
    }

    async fn set_active_league(&self, league_id: i32) -> Result<(), CollaboratorError> {
        self.set_active_league_id(league_id).await
    }
}
