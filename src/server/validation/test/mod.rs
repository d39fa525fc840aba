use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    validation::{
        check_league_field_lengths, check_new_user_fields, check_player_field_lengths,
        check_team_field_lengths, validate_player_fields, validate_team_fields, Violation,
    },
};

fn assert_violation(result: Result<(), AppError>, expected: Violation) {
    match result {
        Err(AppError::ValidationErr(violation)) => assert_eq!(violation, expected),
        other => panic!("expected violation {:?}, got: {:?}", expected, other.err()),
    }
}

/// Tests only the first violated check is reported.
///
/// Both the name and the tag exceed their bounds; the name check is
/// declared first, so its code wins and the tag check never reports.
#[test]
fn reports_only_the_first_violation() {
    let long_name = "n".repeat(60);
    let long_tag = "t".repeat(10);

    let result = check_team_field_lengths(&long_name, &long_tag, "");

    assert_eq!(result, Err(Violation::NameTooLong));
}

#[test]
fn accepts_team_fields_within_bounds() {
    assert_eq!(check_team_field_lengths("Sharks", "SHK", "A team"), Ok(()));
}

#[test]
fn rejects_short_team_fields_after_long_checks() {
    assert_eq!(check_team_field_lengths("S", "SHK", ""), Err(Violation::NameTooShort));
    assert_eq!(check_team_field_lengths("Sharks", "S", ""), Err(Violation::TagTooShort));
}

/// League checks are declared description-first.
#[test]
fn league_checks_run_description_first() {
    let long_name = "n".repeat(60);
    let long_description = "d".repeat(600);

    assert_eq!(
        check_league_field_lengths(&long_name, &long_description),
        Err(Violation::DescriptionTooLong)
    );
    assert_eq!(
        check_league_field_lengths(&long_name, "ok"),
        Err(Violation::NameTooLong)
    );
}

/// Player checks are declared identifier-first.
#[test]
fn player_checks_run_identifier_first() {
    let long_name = "n".repeat(60);
    let long_identifier = "i".repeat(60);

    assert_eq!(
        check_player_field_lengths(&long_name, &long_identifier),
        Err(Violation::GameIdentifierTooLong)
    );
    assert_eq!(
        check_player_field_lengths(&long_name, "ign"),
        Err(Violation::NameTooLong)
    );
    assert_eq!(
        check_player_field_lengths("ok", "i"),
        Err(Violation::GameIdentifierTooShort)
    );
}

#[test]
fn rejects_malformed_emails_and_short_passwords() {
    assert_eq!(
        check_new_user_fields("not-an-email", "longenough"),
        Err(Violation::EmailMalformed)
    );
    assert_eq!(
        check_new_user_fields("@nodomain", "longenough"),
        Err(Violation::EmailMalformed)
    );
    assert_eq!(
        check_new_user_fields("a@b.com", "short"),
        Err(Violation::PasswordTooShort)
    );
    assert_eq!(check_new_user_fields("a@b.com", "longenough"), Ok(()));
}

/// Tests the uniqueness stage reports nameInUse for a duplicate team name.
#[tokio::test]
async fn reports_duplicate_team_name() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    factory::team::TeamFactory::new(db, league.id)
        .name("Sharks")
        .tag("SHK")
        .build()
        .await
        .unwrap();

    let teams = TeamRepository::new(db);
    let result = validate_team_fields(&teams, league.id, None, "Sharks", "OTHER", "").await;

    assert_violation(result, Violation::NameInUse);
}

/// Tests the tag uniqueness check runs only after the name check passes.
#[tokio::test]
async fn reports_duplicate_team_tag() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    factory::team::TeamFactory::new(db, league.id)
        .name("Sharks")
        .tag("SHK")
        .build()
        .await
        .unwrap();

    let teams = TeamRepository::new(db);
    let result = validate_team_fields(&teams, league.id, None, "Whales", "SHK", "").await;

    assert_violation(result, Violation::TagInUse);
}

/// Tests a team being updated is excluded from its own uniqueness checks.
#[tokio::test]
async fn update_does_not_collide_with_itself() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let team = factory::team::TeamFactory::new(db, league.id)
        .name("Sharks")
        .tag("SHK")
        .build()
        .await
        .unwrap();

    let teams = TeamRepository::new(db);
    let result =
        validate_team_fields(&teams, league.id, Some(team.id), "Sharks", "SHK", "").await;

    assert!(result.is_ok());
}

/// Tests the game identifier uniqueness is scoped to the whole league.
#[tokio::test]
async fn reports_duplicate_game_identifier_across_teams() {
    let mut test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let league = factory::league::create_league(db).await.unwrap();
    let team1 = factory::team::create_team(db, league.id).await.unwrap();
    factory::player::PlayerFactory::new(db, team1.id)
        .game_identifier("Faker")
        .build()
        .await
        .unwrap();

    // Same identifier on a different team of the same league still collides.
    let players = PlayerRepository::new(db);
    let result = validate_player_fields(&players, league.id, None, "Someone", "Faker").await;
    assert_violation(result, Violation::GameIdentifierInUse);
}
