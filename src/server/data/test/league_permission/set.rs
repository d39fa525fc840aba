use super::*;

/// Tests setting permissions creates a row for the (league, user) pair.
#[tokio::test]
async fn creates_a_new_record() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();

    let repo = LeaguePermissionRepository::new(db);
    repo.set(
        league.id,
        user.id,
        LeaguePermissions {
            administrator: true,
            create_teams: true,
            edit_teams: false,
            edit_games: false,
        },
    )
    .await
    .unwrap();

    let permissions = repo.get(league.id, user.id).await.unwrap();
    assert!(permissions.administrator);
    assert!(permissions.create_teams);
}

/// Tests setting permissions twice updates the existing row in place.
#[tokio::test]
async fn updates_an_existing_record() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();

    let repo = LeaguePermissionRepository::new(db);
    repo.set(
        league.id,
        user.id,
        LeaguePermissions {
            administrator: true,
            create_teams: true,
            edit_teams: true,
            edit_games: true,
        },
    )
    .await
    .unwrap();

    // Revoking admin must not leave the old flags behind.
    repo.set(
        league.id,
        user.id,
        LeaguePermissions {
            administrator: false,
            create_teams: true,
            edit_teams: false,
            edit_games: false,
        },
    )
    .await
    .unwrap();

    let permissions = repo.get(league.id, user.id).await.unwrap();
    assert!(!permissions.administrator);
    assert!(permissions.create_teams);
    assert!(!permissions.edit_teams);
    assert!(!permissions.edit_games);
}
