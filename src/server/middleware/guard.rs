//! The ordered guard chain gating protected endpoints.
//!
//! Each route binds a fixed `&[Guard]` at registration time. The chain runs
//! the guards strictly in order against the request's [`RequestContext`] and
//! the injected [`Collaborators`]; the first guard that fails stops the chain,
//! and the handler only runs once every guard has passed. A failing guard is
//! either a [`Denial`] (policy: stable code, 400/403) or a fault (collaborator
//! breakage: bare 500); see `server::error::guard`.
//!
//! Checks whose subject id arrives in the request body (a team id inside a
//! player payload, for instance) cannot run before the handler has parsed the
//! body. Those live here too, as the `check_*` functions, sharing the same
//! denial codes and fault semantics as their chain-borne counterparts.

use crate::server::{
    error::guard::{Denial, GuardError},
    middleware::{
        collaborator::Collaborators,
        context::RequestContext,
        permission::{Capability, LeaguePermissions, TeamPermissions},
    },
};

/// One named check in a route's ordered guard list.
///
/// Within a chain, later guards may assume the context values earlier guards
/// are documented to set: `Authenticate` sets the user id, `GetActiveLeague`
/// the league id, `GetUrlId` the parsed path id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Resolves the logged-in user; denies `notLoggedIn` otherwise.
    Authenticate,
    /// Resolves the selected league; denies `noActiveLeague` otherwise.
    GetActiveLeague,
    /// Parses the numeric path parameter; denies `IdMustBeInteger` otherwise.
    GetUrlId,
    /// Requires the league addressed by the url id to exist.
    LeagueExists,
    /// Requires the team addressed by the url id to exist in the active league.
    TeamExists,
    /// Requires the league administrator flag.
    IsLeagueAdmin,
    /// Requires league or team administrator standing for the url-id team.
    IsTeamAdmin,
    /// Requires rights to create teams in the active league.
    CanCreateTeam,
    /// Requires rights to edit the url-id team's information.
    CanEditTeamInfo,
    /// Requires rights to create and edit games in the active league.
    CanEditSchedule,
    /// Requires rights to report the url-id game's result.
    CanReportResult,
    /// Requires the url-id team to have no associated games.
    TeamNotActive,
    /// Requires the active league to accept new members.
    CanJoinLeague,
}

/// Executes a route's guard list for one request.
pub struct GuardChain<'a> {
    collab: &'a Collaborators<'a>,
}

impl<'a> GuardChain<'a> {
    pub fn new(collab: &'a Collaborators<'a>) -> Self {
        Self { collab }
    }

    /// Runs the guards in order and returns the accumulated context.
    ///
    /// `url_param` carries the raw path parameter for chains containing
    /// [`Guard::GetUrlId`]; routes without a numeric path segment pass `None`.
    /// The first failing guard aborts the run; no later guard is evaluated.
    pub async fn run(
        &self,
        guards: &[Guard],
        url_param: Option<&str>,
    ) -> Result<RequestContext, GuardError> {
        let mut ctx = RequestContext::new();

        for guard in guards {
            self.evaluate(guard, &mut ctx, url_param).await?;
        }

        Ok(ctx)
    }

    async fn evaluate(
        &self,
        guard: &Guard,
        ctx: &mut RequestContext,
        url_param: Option<&str>,
    ) -> Result<(), GuardError> {
        match guard {
            Guard::Authenticate => match self.collab.sessions.resolve_user().await? {
                Some(user_id) => {
                    ctx.set_user_id(user_id);
                    Ok(())
                }
                None => Err(Denial::NotLoggedIn.into()),
            },
            Guard::GetActiveLeague => {
                match self.collab.sessions.resolve_active_league().await? {
                    Some(league_id) => {
                        ctx.set_league_id(league_id);
                        Ok(())
                    }
                    None => Err(Denial::NoActiveLeague.into()),
                }
            }
            Guard::GetUrlId => {
                // A missing parameter is a registration bug, not client error.
                let raw = url_param.ok_or(super::context::ContextError("urlId"))?;
                match raw.parse::<i32>() {
                    Ok(url_id) => {
                        ctx.set_url_id(url_id);
                        Ok(())
                    }
                    Err(_) => Err(Denial::IdMustBeInteger.into()),
                }
            }
            Guard::LeagueExists => {
                if self.collab.leagues.exists(ctx.url_id()?).await? {
                    Ok(())
                } else {
                    Err(Denial::LeagueDoesNotExist.into())
                }
            }
            Guard::TeamExists => {
                check_team_exists(self.collab, ctx.league_id()?, ctx.url_id()?).await
            }
            Guard::IsLeagueAdmin => {
                let league = self
                    .collab
                    .leagues
                    .permissions(ctx.league_id()?, ctx.user_id()?)
                    .await?;
                require(
                    Capability::LeagueAdmin.granted_by(&league, &TeamPermissions::default()),
                    Denial::NotAdmin,
                )
            }
            Guard::IsTeamAdmin => {
                check_is_team_admin(self.collab, ctx.league_id()?, ctx.url_id()?, ctx.user_id()?)
                    .await
            }
            Guard::CanCreateTeam => {
                let league = self
                    .collab
                    .leagues
                    .permissions(ctx.league_id()?, ctx.user_id()?)
                    .await?;
                require(
                    Capability::CreateTeam.granted_by(&league, &TeamPermissions::default()),
                    Denial::NoEditTeamPermissions,
                )
            }
            Guard::CanEditTeamInfo => {
                check_can_edit_team_info(
                    self.collab,
                    ctx.league_id()?,
                    ctx.url_id()?,
                    ctx.user_id()?,
                )
                .await
            }
            Guard::CanEditSchedule => {
                let league = self
                    .collab
                    .leagues
                    .permissions(ctx.league_id()?, ctx.user_id()?)
                    .await?;
                require(
                    Capability::EditSchedule.granted_by(&league, &TeamPermissions::default()),
                    Denial::NoEditSchedulePermissions,
                )
            }
            Guard::CanReportResult => {
                let can_report = self
                    .collab
                    .games
                    .can_report(ctx.league_id()?, ctx.url_id()?, ctx.user_id()?)
                    .await?;
                require(can_report, Denial::NoReportResultPermissions)
            }
            Guard::TeamNotActive => {
                let active = self
                    .collab
                    .teams
                    .has_played_games(ctx.league_id()?, ctx.url_id()?)
                    .await?;
                require(!active, Denial::TeamIsActive)
            }
            Guard::CanJoinLeague => {
                let joinable = self
                    .collab
                    .leagues
                    .publicly_joinable(ctx.league_id()?)
                    .await?;
                require(joinable, Denial::CanNotJoin)
            }
        }
    }
}

fn require(granted: bool, denial: Denial) -> Result<(), GuardError> {
    if granted {
        Ok(())
    } else {
        Err(denial.into())
    }
}

/// Fetches both permission records a team-scoped capability is evaluated over.
async fn league_and_team_permissions(
    collab: &Collaborators<'_>,
    league_id: i32,
    team_id: i32,
    user_id: i32,
) -> Result<(LeaguePermissions, TeamPermissions), GuardError> {
    let league = collab.leagues.permissions(league_id, user_id).await?;
    let team = collab.teams.permissions(team_id, user_id).await?;
    Ok((league, team))
}

pub async fn check_team_exists(
    collab: &Collaborators<'_>,
    league_id: i32,
    team_id: i32,
) -> Result<(), GuardError> {
    require(
        collab.teams.exists(league_id, team_id).await?,
        Denial::TeamDoesNotExist,
    )
}

pub async fn check_player_exists(
    collab: &Collaborators<'_>,
    team_id: i32,
    player_id: i32,
) -> Result<(), GuardError> {
    require(
        collab.teams.player_exists(team_id, player_id).await?,
        Denial::PlayerDoesNotExist,
    )
}

pub async fn check_manager_exists(
    collab: &Collaborators<'_>,
    team_id: i32,
    user_id: i32,
) -> Result<(), GuardError> {
    require(
        collab.teams.manager_exists(team_id, user_id).await?,
        Denial::ManagerDoesNotExist,
    )
}

pub async fn check_game_exists(
    collab: &Collaborators<'_>,
    game_id: i32,
    league_id: i32,
) -> Result<(), GuardError> {
    require(
        collab.games.exists(game_id, league_id).await?,
        Denial::GameDoesNotExist,
    )
}

pub async fn check_is_team_admin(
    collab: &Collaborators<'_>,
    league_id: i32,
    team_id: i32,
    user_id: i32,
) -> Result<(), GuardError> {
    let (league, team) = league_and_team_permissions(collab, league_id, team_id, user_id).await?;
    require(
        Capability::TeamAdmin.granted_by(&league, &team),
        Denial::NotTeamAdmin,
    )
}

pub async fn check_can_edit_team_info(
    collab: &Collaborators<'_>,
    league_id: i32,
    team_id: i32,
    user_id: i32,
) -> Result<(), GuardError> {
    let (league, team) = league_and_team_permissions(collab, league_id, team_id, user_id).await?;
    require(
        Capability::EditTeamInfo.granted_by(&league, &team),
        Denial::NoEditTeamInformationPermissions,
    )
}

pub async fn check_can_edit_players(
    collab: &Collaborators<'_>,
    league_id: i32,
    team_id: i32,
    user_id: i32,
) -> Result<(), GuardError> {
    let (league, team) = league_and_team_permissions(collab, league_id, team_id, user_id).await?;
    require(
        Capability::EditPlayers.granted_by(&league, &team),
        Denial::CanNotEditPlayers,
    )
}
