use super::*;

/// Tests a team counts as active once it appears in any game.
#[tokio::test]
async fn reflects_scheduled_games() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let team1 = factory::team::create_team(db, league.id).await.unwrap();
    let team2 = factory::team::create_team(db, league.id).await.unwrap();
    let idle = factory::team::create_team(db, league.id).await.unwrap();

    let repo = TeamRepository::new(db);
    assert!(!repo.team_has_played_games(league.id, team1.id).await.unwrap());

    factory::game::create_game(db, league.id, team1.id, team2.id)
        .await
        .unwrap();

    // Both sides of the game are active, the third team stays idle.
    assert!(repo.team_has_played_games(league.id, team1.id).await.unwrap());
    assert!(repo.team_has_played_games(league.id, team2.id).await.unwrap());
    assert!(!repo.team_has_played_games(league.id, idle.id).await.unwrap());
}
