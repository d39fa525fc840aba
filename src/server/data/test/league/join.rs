use super::*;

/// Tests joining creates a plain membership record with no capabilities.
#[tokio::test]
async fn creates_a_default_membership() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::LeagueFactory::new(db)
        .public_view(false)
        .build()
        .await
        .unwrap();

    LeagueRepository::new(db).join(league.id, user.id).await.unwrap();

    let permissions = LeaguePermissionRepository::new(db)
        .get(league.id, user.id)
        .await
        .unwrap();
    assert!(!permissions.administrator);
    assert!(!permissions.create_teams);

    // Membership makes a private league viewable.
    assert!(LeagueRepository::new(db)
        .is_viewable(league.id, Some(user.id))
        .await
        .unwrap());
}

/// Tests joining twice keeps the existing record untouched.
#[tokio::test]
async fn joining_twice_is_a_no_op() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();
    let league = factory::league::create_league(db).await.unwrap();
    factory::league_permission::LeaguePermissionFactory::new(db, league.id, user.id)
        .administrator(true)
        .build()
        .await
        .unwrap();

    LeagueRepository::new(db).join(league.id, user.id).await.unwrap();

    // An administrator who re-joins must not be demoted.
    let permissions = LeaguePermissionRepository::new(db)
        .get(league.id, user.id)
        .await
        .unwrap();
    assert!(permissions.administrator);
}
