//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a league and a team owned by that league.
///
/// All entities use default values. Use the individual factories when a test
/// needs to customize specific fields.
pub async fn create_team_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::league::Model,
        entity::team::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let league = crate::factory::league::create_league(db).await?;
    let team = crate::factory::team::create_team(db, league.id).await?;

    Ok((user, league, team))
}

/// Creates two teams in a fresh league plus an unreported game between them.
pub async fn create_game_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::league::Model,
        entity::team::Model,
        entity::team::Model,
        entity::game::Model,
    ),
    DbErr,
> {
    let league = crate::factory::league::create_league(db).await?;
    let team1 = crate::factory::team::create_team(db, league.id).await?;
    let team2 = crate::factory::team::create_team(db, league.id).await?;
    let game = crate::factory::game::create_game(db, league.id, team1.id, team2.id).await?;

    Ok((league, team1, team2, game))
}
