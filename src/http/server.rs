//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (route guard, request ID, timeout, tracing)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::GateConfig;
use crate::http::handlers;
use crate::http::middleware::route_guard_middleware;
use crate::http::session::{CookieSessionProbe, SessionProbe};
use crate::routing::RouteTable;

/// Application state injected into handlers and the route guard.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GateConfig>,
    pub routes: Arc<RouteTable>,
    pub sessions: Arc<dyn SessionProbe>,
}

impl AppState {
    /// Compile route tables and use the configured session cookie.
    pub fn from_config(config: GateConfig) -> Result<Self, regex::Error> {
        let routes = Arc::new(RouteTable::from_config(&config.routes)?);
        let sessions: Arc<dyn SessionProbe> =
            Arc::new(CookieSessionProbe::new(config.auth.session_cookie.clone()));

        Ok(Self {
            config: Arc::new(config),
            routes,
            sessions,
        })
    }

    /// Replace the session collaborator.
    pub fn with_session_probe(mut self, probe: Arc<dyn SessionProbe>) -> Self {
        self.sessions = probe;
        self
    }
}

/// HTTP server for the gate.
pub struct HttpServer {
    router: Router,
    config: Arc<GateConfig>,
}

impl HttpServer {
    /// Create a new HTTP server around prepared state.
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GateConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/public/routes/classify", get(handlers::classify))
            .route("/api/public/dates/display", get(handlers::display_date))
            .route("/api/public/dates/storage", get(handlers::storage_date))
            .route("/api/public/dates/mask", post(handlers::mask_date))
            .route("/api/public/menu", get(handlers::menus))
            .route("/api/public/config", get(handlers::public_config))
            .route("/api/public/signup/validate", post(handlers::validate_signup))
            .route("/api/public/login/validate", post(handlers::validate_login))
            .route("/api/public/auth/error-message", get(handlers::auth_error_message))
            .route("/api/protected/menu/private", get(handlers::private_menu))
            .fallback(handlers::not_found)
            .layer(middleware::from_fn_with_state(state.clone(), route_guard_middleware))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The fully layered router, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `shutdown` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
