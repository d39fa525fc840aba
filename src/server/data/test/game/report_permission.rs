use super::*;

/// Tests users without any permission rows cannot report.
///
/// Absent records default to all-false and the check answers false, never
/// an error.
#[tokio::test]
async fn denies_without_any_records() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let (league, _team1, _team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();

    let can_report = GameRepository::new(db)
        .has_report_permission(league.id, game.id, user.id)
        .await
        .unwrap();

    assert!(!can_report);
}

/// Tests the league edit-games flag grants reporting for any game.
#[tokio::test]
async fn grants_via_league_schedule_rights() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let (league, _team1, _team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();
    factory::league_permission::LeaguePermissionFactory::new(db, league.id, user.id)
        .edit_games(true)
        .build()
        .await
        .unwrap();

    let can_report = GameRepository::new(db)
        .has_report_permission(league.id, game.id, user.id)
        .await
        .unwrap();

    assert!(can_report);
}

/// Tests the report flag on either participating team grants reporting.
#[tokio::test]
async fn grants_via_either_teams_report_flag() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let (league, _team1, team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();
    factory::team_permission::TeamPermissionFactory::new(db, team2.id, user.id)
        .report_results(true)
        .build()
        .await
        .unwrap();

    let can_report = GameRepository::new(db)
        .has_report_permission(league.id, game.id, user.id)
        .await
        .unwrap();

    assert!(can_report);
}

/// Tests report rights on a team do not leak to another game's teams.
#[tokio::test]
async fn does_not_grant_for_unrelated_games() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let (league, _team1, _team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();
    let unrelated = factory::team::create_team(db, league.id).await.unwrap();
    factory::team_permission::TeamPermissionFactory::new(db, unrelated.id, user.id)
        .report_results(true)
        .build()
        .await
        .unwrap();

    let can_report = GameRepository::new(db)
        .has_report_permission(league.id, game.id, user.id)
        .await
        .unwrap();

    assert!(!can_report);
}
