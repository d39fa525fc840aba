use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{game, league, team, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    league::create_league,
    league::update_league_info,
    league::set_active_league,
    league::join_active_league,
    league::get_active_league_information,
    league::get_public_leagues,
    league::get_team_summary,
    league::get_game_summary,
    league::get_team_managers,
    league::set_league_permissions,
    team::create_new_team,
    team::get_team_information,
    team::update_team,
    team::delete_team,
    team::add_player_to_team,
    team::add_external_player_to_team,
    team::update_player,
    team::remove_player_from_team,
    team::update_manager_permissions,
    game::create_new_game,
    game::get_game_information,
    game::report_game_result,
    game::reschedule_game,
    game::delete_game,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        // Users
        .route("/api/users", post(user::create_user))
        .route("/api/users/login", post(user::login))
        .route("/api/users/logout", post(user::logout))
        .route("/api/users/profile", get(user::get_profile))
        .route("/api/users/permissions", get(user::get_user_permissions))
        // Leagues
        .route(
            "/api/leagues",
            post(league::create_league)
                .put(league::update_league_info)
                .get(league::get_active_league_information),
        )
        .route(
            "/api/leagues/setActiveLeague/{id}",
            post(league::set_active_league),
        )
        .route("/api/leagues/join", post(league::join_active_league))
        .route("/api/leagues/publicLeagues", get(league::get_public_leagues))
        .route("/api/leagues/teamSummary", get(league::get_team_summary))
        .route("/api/leagues/gameSummary", get(league::get_game_summary))
        .route("/api/leagues/teamManagers", get(league::get_team_managers))
        .route(
            "/api/leagues/setLeaguePermissions",
            post(league::set_league_permissions),
        )
        // Teams
        .route("/api/teams", post(team::create_new_team))
        .route("/api/teams/{id}", get(team::get_team_information))
        .route("/api/teams/updateTeam/{id}", put(team::update_team))
        .route("/api/teams/removeTeam/{id}", delete(team::delete_team))
        .route("/api/teams/addPlayer", post(team::add_player_to_team))
        .route(
            "/api/teams/addExternalPlayer",
            post(team::add_external_player_to_team),
        )
        .route("/api/teams/updatePlayer", put(team::update_player))
        .route(
            "/api/teams/removePlayer",
            delete(team::remove_player_from_team),
        )
        .route(
            "/api/teams/updatePermissions",
            put(team::update_manager_permissions),
        )
        // Games
        .route("/api/games", post(game::create_new_game))
        .route(
            "/api/games/{id}",
            get(game::get_game_information).delete(game::delete_game),
        )
        .route("/api/games/report/{id}", post(game::report_game_result))
        .route("/api/games/reschedule/{id}", put(game::reschedule_game))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
