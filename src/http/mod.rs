//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → middleware/route_guard.rs (classify path, probe session, allow or redirect)
//!     → handlers.rs (route and date utilities as JSON)
//!     → error.rs (uniform JSON errors)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod session;
pub mod site;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
pub use session::{CookieSessionProbe, SessionProbe, SessionState};
