//! Per-request context populated by guards.
//!
//! The context is created empty when a guard chain starts, owned exclusively
//! by that request, and discarded when the response is produced. Guards write
//! the values they resolve (user id, active league, url id) and later guards
//! and the handler read them. Chains are ordered at route registration so that
//! nothing reads a value before the guard that sets it has run; if that
//! ordering is ever broken the accessors return a [`ContextError`], which is
//! surfaced as an infrastructure fault rather than a panic.

use thiserror::Error;

/// A context value was read before any guard had set it.
#[derive(Error, Debug)]
#[error("context value '{0}' read before the guard that sets it ran")]
pub struct ContextError(pub &'static str);

/// Mutable per-request annotations accumulated by the guard chain.
#[derive(Debug, Default)]
pub struct RequestContext {
    user_id: Option<i32>,
    league_id: Option<i32>,
    url_id: Option<i32>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_user_id(&mut self, user_id: i32) {
        self.user_id = Some(user_id);
    }

    pub fn set_league_id(&mut self, league_id: i32) {
        self.league_id = Some(league_id);
    }

    pub fn set_url_id(&mut self, url_id: i32) {
        self.url_id = Some(url_id);
    }

    /// Id of the authenticated user, set by the authenticate guard.
    pub fn user_id(&self) -> Result<i32, ContextError> {
        self.user_id.ok_or(ContextError("userId"))
    }

    /// Id of the active league, set by the active-league guard.
    pub fn league_id(&self) -> Result<i32, ContextError> {
        self.league_id.ok_or(ContextError("leagueId"))
    }

    /// Numeric id parsed from the request path, set by the url-id guard.
    pub fn url_id(&self) -> Result<i32, ContextError> {
        self.url_id.ok_or(ContextError("urlId"))
    }
}
