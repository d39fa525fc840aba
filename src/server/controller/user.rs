use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::IdDto,
        user::{CreateUserDto, LeaguePermissionsDto, LoginDto},
    },
    server::{
        data::{league_permission::LeaguePermissionRepository, user::UserRepository},
        error::AppError,
        middleware::{
            collaborator::LiveCollaborators,
            guard::{Guard, GuardChain},
            session::ActiveSession,
        },
        service::user::UserService,
        state::AppState,
        util::parse::parse_json,
        validation,
    },
};

/// POST /api/users - register a new account.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: CreateUserDto = parse_json(&body)?;

    let users = UserRepository::new(&state.db);
    validation::validate_new_user(&users, &payload.email, &payload.password).await?;

    let user_id = UserService::new(&state.db)
        .register(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(IdDto { id: user_id })))
}

/// POST /api/users/login - verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload: LoginDto = parse_json(&body)?;

    let user_id = UserService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    ActiveSession::new(&session).set_user_id(user_id).await?;

    Ok(StatusCode::OK)
}

/// POST /api/users/logout - drop the session, including the active league.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    ActiveSession::new(&session).clear().await;
    Ok(StatusCode::OK)
}

/// GET /api/users/profile - the logged-in user's account information.
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::Authenticate], None)
        .await?;

    let user = UserService::new(&state.db)
        .profile(ctx.user_id()?)
        .await?
        .ok_or_else(|| AppError::NotFound("userDoesNotExist".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/users/permissions - the caller's permission record in the
/// active league.
pub async fn get_user_permissions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let live = LiveCollaborators::new(&state.db, &session);
    let collab = live.collaborators();
    let ctx = GuardChain::new(&collab)
        .run(&[Guard::Authenticate, Guard::GetActiveLeague], None)
        .await?;

    let permissions = LeaguePermissionRepository::new(&state.db)
        .get(ctx.league_id()?, ctx.user_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LeaguePermissionsDto {
            administrator: permissions.administrator,
            create_teams: permissions.create_teams,
            edit_teams: permissions.edit_teams,
            edit_games: permissions.edit_games,
        }),
    ))
}
