//! League of Legends API client.
//!
//! Resolves a player's in-game name to the Riot summoner id stored alongside
//! the roster entry. The client is optional: without an API key configured,
//! lookups answer with the `lolApiError` code like any other lookup failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LolApiError {
    #[error("League of Legends API is not configured")]
    Disabled,

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl IntoResponse for LolApiError {
    fn into_response(self) -> Response {
        tracing::warn!("League of Legends API lookup failed: {self}");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "lolApiError".to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
struct SummonerDto {
    id: String,
}

#[derive(Clone)]
pub struct LolApiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl LolApiClient {
    pub fn new(http: reqwest::Client, base_url: Url, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// Looks up the summoner id for an in-game name.
    pub async fn summoner_id_by_name(&self, summoner_name: &str) -> Result<String, LolApiError> {
        let api_key = self.api_key.as_deref().ok_or(LolApiError::Disabled)?;

        let url = self
            .base_url
            .join(&format!("lol/summoner/v4/summoners/by-name/{summoner_name}"))?;

        let summoner: SummonerDto = self
            .http
            .get(url)
            .header("X-Riot-Token", api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(summoner.id)
    }
}
