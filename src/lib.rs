//! Starter gate: route classification and date normalization for a
//! web-application starter, served behind a small route-guarding HTTP layer.

pub mod config;
pub mod date;
pub mod forms;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::GateConfig;
pub use http::{AppState, HttpServer};
pub use routing::{RouteAccess, RouteTable};
