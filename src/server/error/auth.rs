use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The email/password pair did not match a stored account.
    ///
    /// Deliberately does not distinguish "unknown email" from "wrong password".
    /// Results in a 403 Forbidden response with the `invalidLogin` code.
    #[error("login attempt with invalid credentials")]
    InvalidCredentials,

    /// Hashing or verifying a password failed for reasons other than a mismatch.
    ///
    /// Results in a 500 Internal Server Error; the message stays server-side.
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "invalidLogin".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash(msg) => {
                tracing::error!("password hash failure: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
