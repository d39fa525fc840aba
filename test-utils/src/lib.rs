//! Shared testing utilities.
//!
//! Provides a builder for test contexts backed by in-memory SQLite databases,
//! a session instance wired to the same database, and entity factories with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_team_operations() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_league_tables().build().await?;
//!     let db = test.database().await?;
//!
//!     let (user, league, team) = test_utils::factory::helpers::create_team_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
