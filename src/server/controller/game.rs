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
        game::{CreateGameDto, GameDto, GameReportDto, RescheduleGameDto},
    },
    server::{
        data::game::GameRepository,
        error::{guard::Denial, AppError},
        middleware::{
            collaborator::LiveCollaborators,
            guard::{self, Guard, GuardChain},
        },
        model::game::{CreateGameParams, GameResultParams},
        service::game::GameService,
        state::AppState,
        util::parse::parse_json,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "games";

/// Schedule a new game between two teams of the active league.
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 200, description = "Game scheduled", body = IdDto),
        (status = 400, description = "Team missing or schedule conflict", body = ErrorDto),
        (status = 403, description = "No rights to edit the schedule", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn create_new_game(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::GetActiveLeague, Guard::Authenticate, Guard::CanEditSchedule],
            None,
        )
        .await?;

    let payload: CreateGameDto = parse_json(&body)?;

    guard::check_team_exists(&collab, ctx.league_id()?, payload.team1_id).await?;
    guard::check_team_exists(&collab, ctx.league_id()?, payload.team2_id).await?;

    let game_id = GameService::new(&state.db)
        .schedule(ctx.league_id()?, CreateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(IdDto { id: game_id })))
}

/// Get information about a game in the active league.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Game information", body = GameDto),
        (status = 400, description = "Id malformed or game does not exist", body = ErrorDto),
        (status = 403, description = "No active league", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn get_game_information(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::GetUrlId], Some(&id))
        .await?;

    let game = GameService::new(&state.db)
        .information(ctx.league_id()?, ctx.url_id()?)
        .await?
        .ok_or(AppError::from(Denial::GameDoesNotExist))?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Report the result of a game.
///
/// Open to league schedule editors and managers with report rights on either
/// participating team.
#[utoipa::path(
    post,
    path = "/api/games/report/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    request_body = GameReportDto,
    responses(
        (status = 200, description = "Result recorded"),
        (status = 400, description = "Game missing or winner not a participant", body = ErrorDto),
        (status = 403, description = "No rights to report this result", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn report_game_result(
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
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanReportResult,
            ],
            Some(&id),
        )
        .await?;

    let payload: GameReportDto = parse_json(&body)?;

    GameService::new(&state.db)
        .report(
            ctx.league_id()?,
            ctx.url_id()?,
            GameResultParams::from_dto(payload),
        )
        .await?;

    Ok(StatusCode::OK)
}

/// Move a game to a new time.
#[utoipa::path(
    put,
    path = "/api/games/reschedule/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    request_body = RescheduleGameDto,
    responses(
        (status = 200, description = "Game rescheduled"),
        (status = 400, description = "Game missing or schedule conflict", body = ErrorDto),
        (status = 403, description = "No rights to edit the schedule", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn reschedule_game(
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
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanEditSchedule,
            ],
            Some(&id),
        )
        .await?;

    let payload: RescheduleGameDto = parse_json(&body)?;

    GameService::new(&state.db)
        .reschedule(ctx.league_id()?, ctx.url_id()?, payload.game_time)
        .await?;

    Ok(StatusCode::OK)
}

/// Remove a game from the schedule.
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 200, description = "Game deleted"),
        (status = 400, description = "Id malformed or game does not exist", body = ErrorDto),
        (status = 403, description = "No rights to edit the schedule", body = ErrorDto),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn delete_game(
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
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanEditSchedule,
            ],
            Some(&id),
        )
        .await?;

    guard::check_game_exists(&collab, ctx.url_id()?, ctx.league_id()?).await?;

    GameRepository::new(&state.db)
        .delete(ctx.url_id()?, ctx.league_id()?)
        .await?;

    Ok(StatusCode::OK)
}
