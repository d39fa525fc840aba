//! Factory methods for creating test data.
//!
//! Each entity has a factory module with a builder-style `Factory` struct for
//! customization and a `create_*` convenience function for quick defaults.
//! Factories handle foreign keys through the `helpers` module, which builds
//! whole dependency chains (user → league → team → game) in one call.

pub mod game;
pub mod helpers;
pub mod league;
pub mod league_permission;
pub mod player;
pub mod team;
pub mod team_permission;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use game::create_game;
pub use league::create_league;
pub use league_permission::create_league_permission;
pub use player::create_player;
pub use team::create_team;
pub use team_permission::create_team_permission;
pub use user::create_user;
