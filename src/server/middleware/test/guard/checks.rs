//! Tests for the handler-side checks whose subject ids arrive in the body.

use super::*;
use crate::server::middleware::guard::{
    check_can_edit_players, check_can_edit_team_info, check_game_exists, check_is_team_admin,
    check_manager_exists, check_player_exists, check_team_exists,
};

/// Tests the team existence check denies a missing team.
///
/// Expected: Denied(TeamDoesNotExist)
#[tokio::test]
async fn denies_missing_team() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert_denied(
        check_team_exists(&collab, 1, 5).await,
        Denial::TeamDoesNotExist,
    );
}

/// Tests the player existence check denies a missing roster entry.
///
/// Expected: Denied(PlayerDoesNotExist)
#[tokio::test]
async fn denies_missing_player() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new().existing();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert_denied(
        check_player_exists(&collab, 5, 9).await,
        Denial::PlayerDoesNotExist,
    );
}

/// Tests the manager existence check denies an unknown manager.
///
/// Expected: Denied(ManagerDoesNotExist)
#[tokio::test]
async fn denies_missing_manager() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new().existing();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert_denied(
        check_manager_exists(&collab, 5, 2).await,
        Denial::ManagerDoesNotExist,
    );
}

/// Tests the game existence check denies an unknown game.
///
/// Expected: Denied(GameDoesNotExist)
#[tokio::test]
async fn denies_missing_game() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert_denied(
        check_game_exists(&collab, 16, 14).await,
        Denial::GameDoesNotExist,
    );
}

/// Tests roster editing is denied without any granted flag.
///
/// Expected: Denied(CanNotEditPlayers)
#[tokio::test]
async fn denies_roster_edit_without_permissions() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert_denied(
        check_can_edit_players(&collab, 1, 5, 2).await,
        Denial::CanNotEditPlayers,
    );
}

/// Tests the team players flag grants roster editing.
///
/// Expected: Ok
#[tokio::test]
async fn grants_roster_edit_via_team_flag() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new().with_permissions(TeamPermissions {
        players: true,
        ..Default::default()
    });
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert!(check_can_edit_players(&collab, 1, 5, 2).await.is_ok());
}

/// Tests league administrators can edit any roster in their league.
///
/// Expected: Ok
#[tokio::test]
async fn grants_roster_edit_to_league_admin() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new().with_permissions(LeaguePermissions {
        administrator: true,
        ..Default::default()
    });
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    assert!(check_can_edit_players(&collab, 1, 5, 2).await.is_ok());
}

/// Tests the league edit-teams flag grants information edits but the team
/// players flag does not.
///
/// Expected: Ok via edit_teams, Denied via players-only
#[tokio::test]
async fn team_info_edit_follows_capability_formula() {
    let sessions = SessionDouble::new();
    let games = GameDouble::new();

    let leagues = LeagueDouble::new().with_permissions(LeaguePermissions {
        edit_teams: true,
        ..Default::default()
    });
    let teams = TeamDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);
    assert!(check_can_edit_team_info(&collab, 1, 5, 2).await.is_ok());

    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new().with_permissions(TeamPermissions {
        players: true,
        ..Default::default()
    });
    let collab = collaborators(&sessions, &leagues, &teams, &games);
    assert_denied(
        check_can_edit_team_info(&collab, 1, 5, 2).await,
        Denial::NoEditTeamInformationPermissions,
    );
}

/// Tests team admin standing comes from either record's administrator flag.
///
/// Expected: Ok via team flag, Denied with no flags
#[tokio::test]
async fn team_admin_requires_administrator_flag() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let games = GameDouble::new();

    let teams = TeamDouble::new().with_permissions(TeamPermissions {
        administrator: true,
        ..Default::default()
    });
    let collab = collaborators(&sessions, &leagues, &teams, &games);
    assert!(check_is_team_admin(&collab, 1, 5, 2).await.is_ok());

    let teams = TeamDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);
    assert_denied(
        check_is_team_admin(&collab, 1, 5, 2).await,
        Denial::NotTeamAdmin,
    );
}
