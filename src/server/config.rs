use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_LOL_API_BASE_URL: &str = "https://na1.api.riotgames.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Base URL of the Riot games API.
    pub lol_api_base_url: Url,
    /// API key for the Riot games API; lookups are disabled when unset.
    pub lol_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let lol_api_base_url = std::env::var("LOL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_LOL_API_BASE_URL.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            lol_api_base_url: lol_api_base_url.parse().map_err(|err: url::ParseError| {
                ConfigError::InvalidEnvVar("LOL_API_BASE_URL".to_string(), err.to_string())
            })?,
            lol_api_key: std::env::var("LOL_API_KEY").ok(),
        })
    }
}
