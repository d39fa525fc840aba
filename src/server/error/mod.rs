//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Denials and validation failures carry a stable machine-readable code in a
//! `{"error": code}` body. Infrastructure failures are logged server-side and
//! surfaced as a bare 500 with no detail in the response.

pub mod auth;
pub mod config;
pub mod guard;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, guard::GuardError},
        service::lol::LolApiError,
        validation::Violation,
    },
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur while serving a request and provides
/// automatic conversion to HTTP responses. Domain-specific errors (`AuthError`,
/// `GuardError`) handle their own response mapping; infrastructure errors collapse
/// into a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Login/credential error with its own status mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// A guard rejected the request or a collaborator call failed mid-chain.
    #[error(transparent)]
    GuardErr(#[from] GuardError),

    /// A submitted field violated a validation constraint.
    ///
    /// Always a 400 with the first violated check's code.
    #[error("validation failed: {0}")]
    ValidationErr(#[from] Violation),

    /// External game statistics API failure.
    #[error(transparent)]
    LolApiErr(#[from] LolApiError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Resource not found error, surfaced as 404 with the provided code.
    #[error("{0}")]
    NotFound(String),

    /// Internal invariant breakage with a message for server-side logging.
    #[error("{0}")]
    InternalError(String),
}

/// Handler-side collaborator calls resolve into the matching infra variant.
impl From<crate::server::middleware::collaborator::CollaboratorError> for AppError {
    fn from(err: crate::server::middleware::collaborator::CollaboratorError) -> Self {
        use crate::server::middleware::collaborator::CollaboratorError;
        match err {
            CollaboratorError::Database(err) => AppError::DbErr(err),
            CollaboratorError::Session(err) => AppError::SessionErr(err),
        }
    }
}

impl From<crate::server::middleware::context::ContextError> for AppError {
    fn from(err: crate::server::middleware::context::ContextError) -> Self {
        AppError::GuardErr(GuardError::Context(err))
    }
}

/// Lets handler-side checks deny with a stable code via `?`.
impl From<guard::Denial> for AppError {
    fn from(denial: guard::Denial) -> Self {
        AppError::GuardErr(GuardError::Denied(denial))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::GuardErr(err) => err.into_response(),
            Self::ValidationErr(violation) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: violation.code().to_string(),
                }),
            )
                .into_response(),
            Self::LolApiErr(err) => err.into_response(),
            Self::NotFound(code) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: code })).into_response()
            }
            err => {
                // Everything else is an infrastructure fault: log it, leak nothing.
                tracing::error!("internal error: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
