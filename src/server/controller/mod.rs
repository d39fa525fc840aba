//! HTTP request handlers.
//!
//! Every handler follows the same shape: build the live collaborators for the
//! request, run the route's guard chain, parse the body (if any), run the
//! handler-side checks and validation, then call into the service or
//! repository layer and convert the result to a DTO.

pub mod game;
pub mod league;
pub mod team;
pub mod user;
