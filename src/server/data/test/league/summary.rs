use super::*;

/// Tests the team summary sorts by record, best first.
#[tokio::test]
async fn team_summary_sorts_by_standings() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    factory::team::TeamFactory::new(db, league.id)
        .name("Middling")
        .record(2, 2)
        .build()
        .await
        .unwrap();
    factory::team::TeamFactory::new(db, league.id)
        .name("Leaders")
        .record(4, 0)
        .build()
        .await
        .unwrap();
    factory::team::TeamFactory::new(db, league.id)
        .name("Trailing")
        .record(0, 4)
        .build()
        .await
        .unwrap();

    let summary = LeagueRepository::new(db).team_summary(league.id).await.unwrap();

    let names: Vec<_> = summary.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Leaders", "Middling", "Trailing"]);
}

/// Tests the game summary is chronological.
#[tokio::test]
async fn game_summary_is_chronological() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let team1 = factory::team::create_team(db, league.id).await.unwrap();
    let team2 = factory::team::create_team(db, league.id).await.unwrap();

    let late = factory::game::GameFactory::new(db, league.id, team1.id, team2.id)
        .game_time(2_000_000_000)
        .build()
        .await
        .unwrap();
    let early = factory::game::GameFactory::new(db, league.id, team1.id, team2.id)
        .game_time(1_900_000_000)
        .build()
        .await
        .unwrap();

    let summary = LeagueRepository::new(db).game_summary(league.id).await.unwrap();

    let ids: Vec<_> = summary.iter().map(|g| g.id).collect();
    assert_eq!(ids, [early.id, late.id]);
}

/// Tests the manager listing groups permission rows under their teams.
#[tokio::test]
async fn team_managers_lists_rows_per_team() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let team = factory::team::create_team(db, league.id).await.unwrap();
    let manager = factory::user::create_user(db).await.unwrap();
    factory::team_permission::TeamPermissionFactory::new(db, team.id, manager.id)
        .information(true)
        .report_results(true)
        .build()
        .await
        .unwrap();

    let summaries = LeagueRepository::new(db).team_managers(league.id).await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].team_id, team.id);
    assert_eq!(summaries[0].managers.len(), 1);

    let listed = &summaries[0].managers[0];
    assert_eq!(listed.user_id, manager.id);
    assert_eq!(listed.user_email, manager.email);
    assert!(listed.information);
    assert!(listed.report_results);
    assert!(!listed.administrator);
}
