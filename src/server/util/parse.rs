use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, validation::Violation};

/// Parses a JSON request body after the route's guards have run.
///
/// Bodies are taken as raw bytes in the handlers so that guard evaluation
/// always precedes body parsing; a body that does not deserialize answers
/// 400 `malformedInput`.
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| Violation::MalformedInput.into())
}
