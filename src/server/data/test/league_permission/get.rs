use super::*;

/// Tests an absent permission row reads as the default all-false record.
///
/// Absence means "no special permissions", never an error.
#[tokio::test]
async fn absent_row_reads_as_default() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();

    let permissions = LeaguePermissionRepository::new(db)
        .get(league.id, user.id)
        .await
        .unwrap();

    assert_eq!(permissions, LeaguePermissions::default());
}

/// Tests a stored row reads back with its flags.
#[tokio::test]
async fn stored_row_reads_back() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();
    factory::league_permission::LeaguePermissionFactory::new(db, league.id, user.id)
        .create_teams(true)
        .edit_games(true)
        .build()
        .await
        .unwrap();

    let permissions = LeaguePermissionRepository::new(db)
        .get(league.id, user.id)
        .await
        .unwrap();

    assert!(permissions.create_teams);
    assert!(permissions.edit_games);
    assert!(!permissions.administrator);
    assert!(!permissions.edit_teams);
}

/// Tests records are scoped per league.
#[tokio::test]
async fn record_is_scoped_to_its_league() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();
    let other_league = factory::league::create_league(db).await.unwrap();
    factory::league_permission::LeaguePermissionFactory::new(db, league.id, user.id)
        .administrator(true)
        .build()
        .await
        .unwrap();

    let permissions = LeaguePermissionRepository::new(db)
        .get(other_league.id, user.id)
        .await
        .unwrap();

    assert_eq!(permissions, LeaguePermissions::default());
}
