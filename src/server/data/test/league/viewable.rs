use super::*;

/// Tests a public league is viewable even without a logged-in user.
#[tokio::test]
async fn public_league_is_viewable_anonymously() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .public_view(true)
        .build()
        .await
        .unwrap();

    assert!(LeagueRepository::new(db)
        .is_viewable(league.id, None)
        .await
        .unwrap());
}

/// Tests a private league is only viewable to members.
#[tokio::test]
async fn private_league_requires_membership() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let member = factory::user::create_user(db).await.unwrap();
    let outsider = factory::user::create_user(db).await.unwrap();
    let league = factory::league::LeagueFactory::new(db)
        .public_view(false)
        .build()
        .await
        .unwrap();
    factory::league_permission::create_league_permission(db, league.id, member.id)
        .await
        .unwrap();

    let repo = LeagueRepository::new(db);
    assert!(repo.is_viewable(league.id, Some(member.id)).await.unwrap());
    assert!(!repo.is_viewable(league.id, Some(outsider.id)).await.unwrap());
    assert!(!repo.is_viewable(league.id, None).await.unwrap());
}

/// Tests an unknown league is not viewable rather than an error.
#[tokio::test]
async fn unknown_league_is_not_viewable() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    assert!(!LeagueRepository::new(db).is_viewable(999, None).await.unwrap());
}
