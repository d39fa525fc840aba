//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned cheaply per request through
//! Axum's state extraction: the database connection is a pooled handle and
//! the API client wraps an `Arc`-backed reqwest client.

use sea_orm::DatabaseConnection;

use crate::server::service::lol::LolApiClient;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for League of Legends summoner lookups.
    pub lol_api: LolApiClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, lol_api: LolApiClient) -> Self {
        Self { db, lol_api }
    }
}
