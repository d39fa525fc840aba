use super::*;

/// Tests existence lookups are scoped to the addressed league.
#[tokio::test]
async fn is_scoped_to_the_league() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let other_league = factory::league::create_league(db).await.unwrap();
    let team = factory::team::create_team(db, league.id).await.unwrap();

    let repo = TeamRepository::new(db);
    assert!(repo.team_exists(league.id, team.id).await.unwrap());
    assert!(!repo.team_exists(other_league.id, team.id).await.unwrap());
    assert!(!repo.team_exists(league.id, team.id + 100).await.unwrap());
}

/// Tests deletion removes the roster and manager rows with the team.
#[tokio::test]
async fn delete_removes_dependents() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();
    let team = factory::team::create_team(db, league.id).await.unwrap();
    factory::player::create_player(db, team.id).await.unwrap();
    factory::team_permission::create_team_permission(db, team.id, user.id)
        .await
        .unwrap();

    let repo = TeamRepository::new(db);
    repo.delete(league.id, team.id).await.unwrap();

    assert!(!repo.team_exists(league.id, team.id).await.unwrap());
    let information = repo.information(league.id, team.id).await.unwrap();
    assert!(information.is_none());
}
