use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, IdDto},
        team::{
            PlayerInformationDto, PlayerRemoveDto, PlayerUpdateDto, TeamDto,
            TeamInformationDto, TeamPermissionChangeDto,
        },
    },
    server::{
        data::{player::PlayerRepository, team::TeamRepository, team_permission::TeamPermissionRepository},
        error::AppError,
        middleware::{
            collaborator::LiveCollaborators,
            guard::{self, Guard, GuardChain},
            permission::TeamPermissions,
        },
        model::team::{NewPlayerParams, TeamFields, UpdatePlayerParams},
        state::AppState,
        util::parse::parse_json,
        validation,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "teams";

/// Register a new team in the active league.
///
/// The creator becomes the team's administrator and an unused generic icon
/// pair is assigned.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = TeamInformationDto,
    responses(
        (status = 200, description = "Team created", body = IdDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Not logged in, no active league, or no team create rights", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_new_team(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::GetActiveLeague, Guard::Authenticate, Guard::CanCreateTeam],
            None,
        )
        .await?;

    let payload: TeamInformationDto = parse_json(&body)?;

    let teams = TeamRepository::new(&state.db);
    validation::validate_team_fields(
        &teams,
        ctx.league_id()?,
        None,
        &payload.name,
        &payload.tag,
        &payload.description,
    )
    .await?;

    let team_id = teams
        .create(ctx.league_id()?, ctx.user_id()?, TeamFields::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(IdDto { id: team_id })))
}

/// Get a team's information and roster.
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team information", body = TeamDto),
        (status = 400, description = "Id malformed or team does not exist", body = ErrorDto),
        (status = 403, description = "No active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_team_information(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::GetActiveLeague, Guard::GetUrlId, Guard::TeamExists],
            Some(&id),
        )
        .await?;

    let team = TeamRepository::new(&state.db)
        .information(ctx.league_id()?, ctx.url_id()?)
        .await?
        .ok_or_else(|| AppError::NotFound("teamDoesNotExist".to_string()))?;

    Ok((StatusCode::OK, Json(team.into_dto())))
}

/// Update a team's name, tag and description.
#[utoipa::path(
    put,
    path = "/api/teams/updateTeam/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    request_body = TeamInformationDto,
    responses(
        (status = 200, description = "Team updated"),
        (status = 400, description = "Validation failed or team does not exist", body = ErrorDto),
        (status = 403, description = "No rights to edit this team's information", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::GetUrlId,
                Guard::Authenticate,
                Guard::CanEditTeamInfo,
            ],
            Some(&id),
        )
        .await?;

    let payload: TeamInformationDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, ctx.url_id()?).await?;

    let teams = TeamRepository::new(&state.db);
    validation::validate_team_fields(
        &teams,
        ctx.league_id()?,
        Some(ctx.url_id()?),
        &payload.name,
        &payload.tag,
        &payload.description,
    )
    .await?;

    teams
        .update(ctx.league_id()?, ctx.url_id()?, TeamFields::from_dto(payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a team that has no games, along with its roster and managers.
#[utoipa::path(
    delete,
    path = "/api/teams/removeTeam/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted"),
        (status = 400, description = "Team does not exist or has played games", body = ErrorDto),
        (status = 403, description = "Not a team or league administrator", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::GetUrlId,
                Guard::Authenticate,
                Guard::TeamNotActive,
                Guard::IsTeamAdmin,
            ],
            Some(&id),
        )
        .await?;

    guard::check_team_exists(&collab, ctx.league_id()?, ctx.url_id()?).await?;

    TeamRepository::new(&state.db)
        .delete(ctx.league_id()?, ctx.url_id()?)
        .await?;

    Ok(StatusCode::OK)
}

/// Create a new player on a team's roster.
#[utoipa::path(
    post,
    path = "/api/teams/addPlayer",
    tag = TEAM_TAG,
    request_body = PlayerInformationDto,
    responses(
        (status = 200, description = "Player added", body = IdDto),
        (status = 400, description = "Validation failed or team does not exist", body = ErrorDto),
        (status = 403, description = "No rights to edit this team's players", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn add_player_to_team(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await?;

    let payload: PlayerInformationDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team_id).await?;
    guard::check_can_edit_players(&collab, ctx.league_id()?, payload.team_id, ctx.user_id()?)
        .await?;

    let players = PlayerRepository::new(&state.db);
    validation::validate_player_fields(
        &players,
        ctx.league_id()?,
        None,
        &payload.name,
        &payload.game_identifier,
    )
    .await?;

    let player_id = players.add(NewPlayerParams::from_dto(payload)).await?;

    Ok((StatusCode::OK, Json(IdDto { id: player_id })))
}

/// Add a player, resolving their summoner id through the League of Legends
/// API before storing the roster entry.
#[utoipa::path(
    post,
    path = "/api/teams/addExternalPlayer",
    tag = TEAM_TAG,
    request_body = PlayerInformationDto,
    responses(
        (status = 200, description = "Player added with external id", body = IdDto),
        (status = 400, description = "Validation or external lookup failed", body = ErrorDto),
        (status = 403, description = "No rights to edit this team's players", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn add_external_player_to_team(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await?;

    let payload: PlayerInformationDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team_id).await?;
    guard::check_can_edit_players(&collab, ctx.league_id()?, payload.team_id, ctx.user_id()?)
        .await?;

    let players = PlayerRepository::new(&state.db);
    validation::validate_player_fields(
        &players,
        ctx.league_id()?,
        None,
        &payload.name,
        &payload.game_identifier,
    )
    .await?;

    let external_id = state
        .lol_api
        .summoner_id_by_name(&payload.game_identifier)
        .await?;

    let mut params = NewPlayerParams::from_dto(payload);
    params.external_id = Some(external_id);
    let player_id = players.add(params).await?;

    Ok((StatusCode::OK, Json(IdDto { id: player_id })))
}

/// Update a player's information.
#[utoipa::path(
    put,
    path = "/api/teams/updatePlayer",
    tag = TEAM_TAG,
    request_body = PlayerUpdateDto,
    responses(
        (status = 200, description = "Player updated"),
        (status = 400, description = "Validation failed or team does not exist", body = ErrorDto),
        (status = 403, description = "No rights to edit this team's players", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await?;

    let payload: PlayerUpdateDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team_id).await?;
    guard::check_can_edit_players(&collab, ctx.league_id()?, payload.team_id, ctx.user_id()?)
        .await?;

    let players = PlayerRepository::new(&state.db);
    validation::validate_player_fields(
        &players,
        ctx.league_id()?,
        Some(payload.player_id),
        &payload.name,
        &payload.game_identifier,
    )
    .await?;

    players.update(UpdatePlayerParams::from_dto(payload)).await?;

    Ok(StatusCode::OK)
}

/// Remove a player from a team's roster.
#[utoipa::path(
    delete,
    path = "/api/teams/removePlayer",
    tag = TEAM_TAG,
    request_body = PlayerRemoveDto,
    responses(
        (status = 200, description = "Player removed"),
        (status = 400, description = "Team or player does not exist", body = ErrorDto),
        (status = 403, description = "No rights to edit this team's players", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn remove_player_from_team(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await?;

    let payload: PlayerRemoveDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team_id).await?;
    guard::check_can_edit_players(&collab, ctx.league_id()?, payload.team_id, ctx.user_id()?)
        .await?;
    guard::check_player_exists(&collab, payload.team_id, payload.player_id).await?;

    PlayerRepository::new(&state.db)
        .remove(payload.team_id, payload.player_id)
        .await?;

    Ok(StatusCode::OK)
}

/// Change a manager's permission flags on a team.
///
/// Requires team or league administrator standing.
#[utoipa::path(
    put,
    path = "/api/teams/updatePermissions",
    tag = TEAM_TAG,
    request_body = TeamPermissionChangeDto,
    responses(
        (status = 200, description = "Permissions updated"),
        (status = 400, description = "Team or manager does not exist", body = ErrorDto),
        (status = 403, description = "Not a team or league administrator", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn update_manager_permissions(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await?;

    let payload: TeamPermissionChangeDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team_id).await?;
    guard::check_manager_exists(&collab, payload.team_id, payload.user_id).await?;
    guard::check_is_team_admin(&collab, ctx.league_id()?, payload.team_id, ctx.user_id()?)
        .await?;

    TeamPermissionRepository::new(&state.db)
        .set(
            payload.team_id,
            payload.user_id,
            TeamPermissions {
                administrator: payload.administrator,
                information: payload.information,
                players: payload.players,
                report_results: payload.report_results,
            },
        )
        .await?;

    Ok(StatusCode::OK)
}
