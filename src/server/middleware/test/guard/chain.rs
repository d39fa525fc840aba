use super::*;

/// Tests an anonymous request is denied by the authenticate guard.
///
/// No collaborator behind the session may be reached.
///
/// Expected: Denied(NotLoggedIn), zero lookups elsewhere
#[tokio::test]
async fn rejects_anonymous_request() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(&[Guard::Authenticate], None)
        .await;

    assert_denied(result, Denial::NotLoggedIn);
    assert_eq!(leagues.calls(), 0);
    assert_eq!(teams.calls(), 0);
    assert_eq!(games.calls(), 0);
}

/// Tests a request without a selected league is denied.
///
/// Expected: Denied(NoActiveLeague)
#[tokio::test]
async fn rejects_without_active_league() {
    let sessions = SessionDouble::new().with_user(2);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague, Guard::Authenticate], None)
        .await;

    assert_denied(result, Denial::NoActiveLeague);
}

/// Tests guards annotate the context for later guards and the handler.
///
/// Expected: userId, leagueId and urlId all populated after the run
#[tokio::test]
async fn accumulates_context_in_order() {
    let sessions = SessionDouble::new().with_user(15).with_league(14);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let ctx = GuardChain::new(&collab)
        .run(
            &[Guard::GetActiveLeague, Guard::Authenticate, Guard::GetUrlId],
            Some("16"),
        )
        .await
        .unwrap();

    assert_eq!(ctx.league_id().unwrap(), 14);
    assert_eq!(ctx.user_id().unwrap(), 15);
    assert_eq!(ctx.url_id().unwrap(), 16);
}

/// Tests the chain stops at the first failing guard.
///
/// The active league resolves but authentication fails, so the report
/// permission collaborator must never be invoked.
///
/// Expected: Denied(NotLoggedIn), zero game lookups
#[tokio::test]
async fn short_circuits_later_guards() {
    let sessions = SessionDouble::new().with_league(14);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new().reportable();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanReportResult,
            ],
            Some("16"),
        )
        .await;

    assert_denied(result, Denial::NotLoggedIn);
    assert_eq!(games.calls(), 0);
}

/// Tests a non-integer path parameter is rejected.
///
/// Expected: Denied(IdMustBeInteger)
#[tokio::test]
async fn rejects_non_integer_url_id() {
    let sessions = SessionDouble::new().with_user(2).with_league(1);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[Guard::GetActiveLeague, Guard::Authenticate, Guard::GetUrlId],
            Some("a"),
        )
        .await;

    assert_denied(result, Denial::IdMustBeInteger);
}

/// Tests a negative report-permission answer is a denial, not a fault.
///
/// Expected: Denied(NoReportResultPermissions) after exactly one lookup
#[tokio::test]
async fn denies_report_without_permission() {
    let sessions = SessionDouble::new().with_user(15).with_league(14);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanReportResult,
            ],
            Some("16"),
        )
        .await;

    assert_denied(result, Denial::NoReportResultPermissions);
    assert_eq!(games.calls(), 1);
}

/// Tests a broken report-permission collaborator is a fault, not a denial.
///
/// The same fixture as `denies_report_without_permission`, except the
/// collaborator errors instead of answering false. The two outcomes must
/// stay distinguishable.
///
/// Expected: Fault
#[tokio::test]
async fn faults_when_report_collaborator_breaks() {
    let sessions = SessionDouble::new().with_user(15).with_league(14);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new().failing();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanReportResult,
            ],
            Some("16"),
        )
        .await;

    assert_fault(result);
}

/// Tests a session store failure surfaces as a fault.
///
/// Expected: Fault
#[tokio::test]
async fn faults_when_session_store_breaks() {
    let sessions = SessionDouble::new().failing();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(&[Guard::GetActiveLeague], None)
        .await;

    assert_fault(result);
}

/// Tests an absent league permission record denies the admin guard.
///
/// A user without a permission row holds the default all-false record, so
/// the guard must deny rather than fault.
///
/// Expected: Denied(NotAdmin)
#[tokio::test]
async fn missing_permission_record_denies_admin() {
    let sessions = SessionDouble::new().with_user(7).with_league(3);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::IsLeagueAdmin],
            None,
        )
        .await;

    assert_denied(result, Denial::NotAdmin);
}

/// Tests the league-exists guard rejects an unknown league id.
///
/// Expected: Denied(LeagueDoesNotExist)
#[tokio::test]
async fn rejects_unknown_league() {
    let sessions = SessionDouble::new();
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(&[Guard::GetUrlId, Guard::LeagueExists], Some("42"))
        .await;

    assert_denied(result, Denial::LeagueDoesNotExist);
}

/// Tests a team with games cannot pass the not-active guard.
///
/// Expected: Denied(TeamIsActive)
#[tokio::test]
async fn rejects_active_team() {
    let sessions = SessionDouble::new().with_user(2).with_league(1);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new().existing().with_played_games();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::GetUrlId,
                Guard::Authenticate,
                Guard::TeamNotActive,
            ],
            Some("5"),
        )
        .await;

    assert_denied(result, Denial::TeamIsActive);
}

/// Tests joining a closed league is denied.
///
/// Expected: Denied(CanNotJoin)
#[tokio::test]
async fn rejects_joining_closed_league() {
    let sessions = SessionDouble::new().with_user(2).with_league(1);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let result = GuardChain::new(&collab)
        .run(
            &[Guard::Authenticate, Guard::GetActiveLeague, Guard::CanJoinLeague],
            None,
        )
        .await;

    assert_denied(result, Denial::CanNotJoin);
}

/// Tests a fully granted chain returns the context for the handler.
///
/// Expected: Ok with all annotations present
#[tokio::test]
async fn passes_when_all_guards_grant() {
    let sessions = SessionDouble::new().with_user(15).with_league(14);
    let leagues = LeagueDouble::new();
    let teams = TeamDouble::new();
    let games = GameDouble::new().reportable();
    let collab = collaborators(&sessions, &leagues, &teams, &games);

    let ctx = GuardChain::new(&collab)
        .run(
            &[
                Guard::GetActiveLeague,
                Guard::Authenticate,
                Guard::GetUrlId,
                Guard::CanReportResult,
            ],
            Some("16"),
        )
        .await
        .unwrap();

    assert_eq!(ctx.user_id().unwrap(), 15);
    assert_eq!(ctx.league_id().unwrap(), 14);
    assert_eq!(ctx.url_id().unwrap(), 16);
    assert_eq!(games.calls(), 1);
}
