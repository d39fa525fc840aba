//! Business logic services.
//!
//! Services carry the orchestration that does not belong in a single
//! repository call: credential handling, result tallies, external lookups.
//! Endpoints whose logic is a straight repository call go through the
//! repositories directly.

pub mod game;
pub mod lol;
pub mod user;
