use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        league::{
            LeagueInformationDto, LeaguePermissionChangeDto, LeagueRequestDto, PublicLeagueDto,
            TeamManagersDto, TeamSummaryDto,
        },
    },
    server::{
        data::{league::LeagueRepository, league_permission::LeaguePermissionRepository},
        error::AppError,
        middleware::{
            collaborator::LiveCollaborators,
            guard::{Guard, GuardChain},
            permission::LeaguePermissions,
        },
        model::league::LeagueParams,
        state::AppState,
        util::{markdown, parse::parse_json},
        validation,
    },
};

/// Tag for grouping league endpoints in OpenAPI documentation
pub static LEAGUE_TAG: &str = "leagues";

/// Create a new league.
///
/// The creator receives the full league permission record and becomes its
/// first administrator.
#[utoipa::path(
    post,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    request_body = LeagueRequestDto,
    responses(
        (status = 200, description = "League created", body = IdDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::Authenticate], None)
        .await?;

    let payload: LeagueRequestDto = parse_json(&body)?;

    let leagues = LeagueRepository::new(&state.db);
    validation::validate_league_fields(&leagues, None, &payload.name, &payload.description)
        .await?;

    let league_id = leagues
        .create(ctx.user_id()?, LeagueParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(IdDto { id: league_id })))
}

/// Update the active league's information. League administrators only.
#[utoipa::path(
    put,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    request_body = LeagueRequestDto,
    responses(
        (status = 200, description = "League updated"),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Not logged in, no active league, or not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_league_info(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::IsLeagueAdmin],
            None,
        )
        .await?;

    let payload: LeagueRequestDto = parse_json(&body)?;

    let leagues = LeagueRepository::new(&state.db);
    validation::validate_league_fields(
        &leagues,
        Some(ctx.league_id()?),
        &payload.name,
        &payload.description,
    )
    .await?;

    leagues
        .update(ctx.league_id()?, LeagueParams::from_dto(payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Select the league all subsequent requests in this session act on.
///
/// Viewable by the caller means the league is public or the caller holds any
/// permission row in it; a non-viewable league answers a bare 403.
#[utoipa::path(
    post,
    path = "/api/leagues/setActiveLeague/{id}",
    tag = LEAGUE_TAG,
    params(("id" = i32, Path, description = "League id")),
    responses(
        (status = 200, description = "Active league set"),
        (status = 400, description = "Id malformed or league does not exist", body = ErrorDto),
        (status = 403, description = "League is not viewable by the caller"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn set_active_league(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetUrlId, Guard::LeagueExists], Some(&id))
        .await?;

    // Logged-out callers can still select publicly viewable leagues.
    let user_id = collab.sessions.resolve_user().await.map_err(AppError::from)?;

    let leagues = LeagueRepository::new(&state.db);
    if !leagues.is_viewable(ctx.url_id()?, user_id).await? {
        return Ok(StatusCode::FORBIDDEN.into_response());
    }

    collab
        .sessions
        .set_active_league(ctx.url_id()?)
        .await
        .map_err(AppError::from)?;

    Ok(StatusCode::OK.into_response())
}

/// Join the active league as a manager with no special permissions.
#[utoipa::path(
    post,
    path = "/api/leagues/join",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Joined the league"),
        (status = 400, description = "League is not accepting new members", body = ErrorDto),
        (status = 403, description = "Not logged in or no active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn join_active_league(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::CanJoinLeague],
            None,
        )
        .await?;

    LeagueRepository::new(&state.db)
        .join(ctx.league_id()?, ctx.user_id()?)
        .await?;

    Ok(StatusCode::OK)
}

/// Get information about the active league.
#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Active league information", body = LeagueInformationDto),
        (status = 403, description = "No active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_active_league_information(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague], None)
        .await?;

    let information = LeagueRepository::new(&state.db)
        .information(ctx.league_id()?)
        .await?
        .ok_or_else(|| AppError::NotFound("leagueDoesNotExist".to_string()))?;

    let description_html = markdown::render_html(&information.description);

    Ok((StatusCode::OK, Json(information.into_dto(description_html))))
}

/// List all publicly viewable leagues.
#[utoipa::path(
    get,
    path = "/api/leagues/publicLeagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Public league list", body = Vec<PublicLeagueDto>),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_public_leagues(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let leagues = LeagueRepository::new(&state.db).public_leagues().await?;

    Ok((
        StatusCode::OK,
        Json(
            leagues
                .into_iter()
                .map(|league| league.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get the active league's standings, best record first.
#[utoipa::path(
    get,
    path = "/api/leagues/teamSummary",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Team summary sorted by standings", body = Vec<TeamSummaryDto>),
        (status = 403, description = "No active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_team_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague], None)
        .await?;

    let teams = LeagueRepository::new(&state.db)
        .team_summary(ctx.league_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(teams.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get the active league's games in chronological order.
#[utoipa::path(
    get,
    path = "/api/leagues/gameSummary",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Game summary in chronological order"),
        (status = 403, description = "No active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_game_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague], None)
        .await?;

    let games = LeagueRepository::new(&state.db)
        .game_summary(ctx.league_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(games.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List every team's managers and their permissions. League admins only.
#[utoipa::path(
    get,
    path = "/api/leagues/teamManagers",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Managers per team", body = Vec<TeamManagersDto>),
        (status = 403, description = "Not logged in, no active league, or not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_team_managers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::IsLeagueAdmin],
            None,
        )
        .await?;

    let managers = LeagueRepository::new(&state.db)
        .team_managers(ctx.league_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(managers.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Set a user's permission record in the active league. League admins only.
#[utoipa::path(
    post,
    path = "/api/leagues/setLeaguePermissions",
    tag = LEAGUE_TAG,
    request_body = LeaguePermissionChangeDto,
    responses(
        (status = 200, description = "Permissions updated"),
        (status = 400, description = "Request body malformed", body = ErrorDto),
        (status = 403, description = "Not logged in, no active league, or not an administrator", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn set_league_permissions(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::IsLeagueAdmin],
            None,
        )
        .await?;

    let payload: LeaguePermissionChangeDto = parse_json(&body)?;

    LeaguePermissionRepository::new(&state.db)
        .set(
            ctx.league_id()?,
            payload.id,
            LeaguePermissions {
                administrator: payload.administrator,
                create_teams: payload.create_teams,
                edit_teams: payload.edit_teams,
                edit_games: payload.edit_games,
            },
        )
        .await?;

    Ok(StatusCode::OK)
}
