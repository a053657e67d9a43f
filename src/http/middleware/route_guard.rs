//! Route guard middleware.
//! Lets public traffic through and sends anonymous visitors of protected
//! paths to the login page.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

use crate::config::DefaultAccess;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::session::SessionState;
use crate::observability::metrics;
use crate::routing::RouteAccess;

/// What the guard decided for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Anonymous request to a protected API path.
    Reject,
    /// Redirect to the given location.
    Redirect(String),
}

impl GuardDecision {
    fn outcome(&self) -> &'static str {
        match self {
            GuardDecision::Allow => "allow",
            GuardDecision::Reject => "reject",
            GuardDecision::Redirect(_) => "redirect",
        }
    }
}

/// Pure decision logic, shared by the middleware and its tests.
pub fn decide(state: &AppState, access: RouteAccess, target: &str, path: &str, authenticated: bool) -> GuardDecision {
    let auth = &state.config.auth;

    if authenticated && path == auth.login_path {
        return GuardDecision::Redirect(auth.redirect_after_login.clone());
    }

    let requires_session = match access {
        RouteAccess::Protected => true,
        RouteAccess::Public => false,
        RouteAccess::Unlisted => state.config.routes.default_access == DefaultAccess::Protected,
    };

    if !requires_session || authenticated {
        GuardDecision::Allow
    } else if path.starts_with("/api/") {
        GuardDecision::Reject
    } else {
        let next: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
        GuardDecision::Redirect(format!("{}?next={}", auth.login_path, next))
    }
}

pub async fn route_guard_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    // 1. Ask the session collaborator, then classify the path.
    let authenticated = state.sessions.is_authenticated(req.headers());
    let access = state.routes.classify(&path);

    // 2. Decide.
    let decision = decide(&state, access, &target, &path, authenticated);
    metrics::record_decision(access.as_str(), decision.outcome());

    match decision {
        GuardDecision::Allow => {
            debug!(path = %path, access = access.as_str(), authenticated, "Request allowed");
            req.extensions_mut().insert(SessionState { authenticated });
            next.run(req).await
        }
        GuardDecision::Reject => {
            info!(path = %path, access = access.as_str(), "Anonymous API request rejected");
            ApiError::Unauthorized.into_response()
        }
        GuardDecision::Redirect(location) => {
            info!(path = %path, location = %location, authenticated, "Redirecting");
            Redirect::to(&location).into_response()
        }
    }
}
