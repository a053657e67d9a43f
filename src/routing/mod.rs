//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → classifier.rs (public / protected / unlisted)
//!     → matcher.rs (evaluate prefix and pattern conditions)
//!     → Return: RouteAccess
//!
//! Table Compilation (at startup):
//!     RoutesConfig
//!     → Compile matchers (prefixes, regexes)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables compiled at startup, immutable at runtime
//! - Deterministic: same input always yields the same class
//! - Menus are filtered per request from static config

pub mod classifier;
pub mod matcher;
pub mod menu;

pub use classifier::{RouteAccess, RouteTable};
