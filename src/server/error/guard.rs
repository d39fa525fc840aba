//! Outcome types for the request guard chain.
//!
//! A guard resolves every collaborator call into one of two failure shapes:
//! a [`Denial`] (the request is well formed but disallowed by policy, answered
//! with a stable error code) or a fault (a collaborator broke unexpectedly,
//! answered with a bare 500). The two must never be confused: a storage outage
//! is not a permission problem, and a permission problem is never a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::middleware::{collaborator::CollaboratorError, context::ContextError},
};

/// Policy-based rejection of a request, with its wire code and HTTP status.
///
/// The codes are part of the public API contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    NotLoggedIn,
    NoActiveLeague,
    IdMustBeInteger,
    LeagueDoesNotExist,
    TeamDoesNotExist,
    PlayerDoesNotExist,
    ManagerDoesNotExist,
    GameDoesNotExist,
    NotAdmin,
    NotTeamAdmin,
    NoEditTeamPermissions,
    NoEditSchedulePermissions,
    NoEditTeamInformationPermissions,
    CanNotEditPlayers,
    NoReportResultPermissions,
    TeamIsActive,
    CanNotJoin,
    ConflictExists,
    WinnerIdDoesNotMatch,
}

impl Denial {
    /// Stable machine-readable code sent to the client as `{"error": code}`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => "notLoggedIn",
            Self::NoActiveLeague => "noActiveLeague",
            Self::IdMustBeInteger => "IdMustBeInteger",
            Self::LeagueDoesNotExist => "leagueDoesNotExist",
            Self::TeamDoesNotExist => "teamDoesNotExist",
            Self::PlayerDoesNotExist => "playerDoesNotExist",
            Self::ManagerDoesNotExist => "managerDoesNotExist",
            Self::GameDoesNotExist => "gameDoesNotExist",
            Self::NotAdmin => "notAdmin",
            Self::NotTeamAdmin => "notTeamAdmin",
            Self::NoEditTeamPermissions => "noEditTeamPermissions",
            Self::NoEditSchedulePermissions => "noEditSchedulePermissions",
            Self::NoEditTeamInformationPermissions => "noEditTeamInformationPermissions",
            Self::CanNotEditPlayers => "canNotEditPlayers",
            Self::NoReportResultPermissions => "noReportResultPermissions",
            Self::TeamIsActive => "teamIsActive",
            Self::CanNotJoin => "canNotJoin",
            Self::ConflictExists => "conflictExists",
            Self::WinnerIdDoesNotMatch => "winnerIdDoesNotMatch",
        }
    }

    /// Authorization denials answer 403, malformed ids and disallowed states 400.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotLoggedIn
            | Self::NoActiveLeague
            | Self::NotAdmin
            | Self::NotTeamAdmin
            | Self::NoEditTeamPermissions
            | Self::NoEditSchedulePermissions
            | Self::NoEditTeamInformationPermissions
            | Self::CanNotEditPlayers
            | Self::NoReportResultPermissions => StatusCode::FORBIDDEN,
            Self::IdMustBeInteger
            | Self::LeagueDoesNotExist
            | Self::TeamDoesNotExist
            | Self::PlayerDoesNotExist
            | Self::ManagerDoesNotExist
            | Self::GameDoesNotExist
            | Self::TeamIsActive
            | Self::CanNotJoin
            | Self::ConflictExists
            | Self::WinnerIdDoesNotMatch => StatusCode::BAD_REQUEST,
        }
    }
}

/// Failure raised by a guard while gating a request.
#[derive(Error, Debug)]
pub enum GuardError {
    /// The request is disallowed by policy; answered with the denial's code.
    #[error("request denied: {}", .0.code())]
    Denied(Denial),

    /// A collaborator reported an unexpected failure; answered with a bare 500.
    #[error(transparent)]
    Fault(#[from] CollaboratorError),

    /// A guard read a context value no earlier guard had set.
    ///
    /// This is a chain-ordering bug in route registration, surfaced as a 500.
    #[error(transparent)]
    Context(#[from] ContextError),
}

impl From<Denial> for GuardError {
    fn from(denial: Denial) -> Self {
        GuardError::Denied(denial)
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        match self {
            Self::Denied(denial) => (
                denial.status(),
                Json(ErrorDto {
                    error: denial.code().to_string(),
                }),
            )
                .into_response(),
            Self::Fault(err) => {
                tracing::error!("collaborator failure while evaluating guards: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Self::Context(err) => {
                tracing::error!("guard chain ordering bug: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
