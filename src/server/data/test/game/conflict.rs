use super::*;

/// Tests a game at the same time involving either team is a conflict.
#[tokio::test]
async fn detects_overlapping_games() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (league, team1, team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();
    let team3 = factory::team::create_team(db, league.id).await.unwrap();

    let repo = GameRepository::new(db);

    // Same slot, one shared team.
    assert!(repo
        .has_conflict(team1.id, team3.id, game.game_time, None)
        .await
        .unwrap());
    // Same slot, both teams free.
    let team4 = factory::team::create_team(db, league.id).await.unwrap();
    assert!(!repo
        .has_conflict(team3.id, team4.id, game.game_time, None)
        .await
        .unwrap());
    // Different slot, same teams.
    assert!(!repo
        .has_conflict(team1.id, team2.id, game.game_time + 3600, None)
        .await
        .unwrap());
}

/// Tests the excluded id lets a game be rescheduled onto its own slot.
#[tokio::test]
async fn excludes_the_game_being_rescheduled() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_league, team1, team2, game) =
        factory::helpers::create_game_with_dependencies(db).await.unwrap();

    let repo = GameRepository::new(db);
    assert!(repo
        .has_conflict(team1.id, team2.id, game.game_time, None)
        .await
        .unwrap());
    assert!(!repo
        .has_conflict(team1.id, team2.id, game.game_time, Some(game.id))
        .await
        .unwrap());
}
