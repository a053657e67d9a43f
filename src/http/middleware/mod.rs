//! Request middleware.

pub mod route_guard;

pub use route_guard::{route_guard_middleware, GuardDecision};
