use super::*;

/// Tests account creation and the email lookups used by validation/login.
#[tokio::test]
async fn creates_and_finds_accounts_by_email() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.is_email_in_use("captain@example.com").await.unwrap());

    let created = repo
        .create("captain@example.com", "$argon2id$test$hash")
        .await
        .unwrap();

    assert!(repo.is_email_in_use("captain@example.com").await.unwrap());

    let found = repo.find_by_email("captain@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$argon2id$test$hash");

    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

/// Tests id lookup returns the stored account.
#[tokio::test]
async fn finds_accounts_by_id() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let user = factory::user::create_user(db).await.unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.email, user.email);

    assert!(repo.find_by_id(user.id + 100).await.unwrap().is_none());
}
