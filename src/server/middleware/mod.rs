//! Request gating middleware.
//!
//! Every protected endpoint declares an ordered list of [`guard::Guard`]s that
//! run before its handler. Guards read and annotate the per-request
//! [`context::RequestContext`], call external collaborators through the
//! interfaces in [`collaborator`], and either pass, deny the request with a
//! stable error code, or fault with a 500. The pure permission formulas live
//! in [`permission`] so the capability matrix stays auditable on its own.

pub mod collaborator;
pub mod context;
pub mod guard;
pub mod permission;
pub mod session;

#[cfg(test)]
mod test;
