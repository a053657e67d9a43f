//! JSON endpoints exposing the route and date utilities to page code.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{MenuItem, UiConfig};
use crate::date::{self, DateInput, MaskProgress};
use crate::forms::{provider_error_message, LoginForm, SignupForm, ValidSignup};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::http::session::SessionState;
use crate::http::site::resolve_base_url;
use crate::routing::menu::{filtered_main_menu, filtered_user_menu};
use crate::routing::RouteAccess;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Deserialize)]
pub struct PathParams {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub path: String,
    pub public: bool,
    pub protected: bool,
    pub access: RouteAccess,
}

pub async fn classify(
    State(state): State<AppState>,
    Query(params): Query<PathParams>,
) -> Json<Classification> {
    let routes = &state.routes;
    Json(Classification {
        public: routes.is_public(&params.path),
        protected: routes.is_protected(&params.path),
        access: routes.classify(&params.path),
        path: params.path,
    })
}

#[derive(Debug, Deserialize)]
pub struct ValueParams {
    pub value: Option<String>,
}

pub async fn display_date(Query(params): Query<ValueParams>) -> Json<Value> {
    Json(json!({ "display": date::to_display_date(params.value.as_deref()) }))
}

pub async fn storage_date(Query(params): Query<ValueParams>) -> Json<Value> {
    let storage = date::to_storage_string(params.value.as_deref().map(DateInput::Text));
    Json(json!({ "storage": storage }))
}

#[derive(Debug, Deserialize)]
pub struct MaskRequest {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct MaskResponse {
    pub masked: String,
    pub progress: MaskProgress,
    /// Set once a complete, real date has been typed.
    pub storage: Option<String>,
    pub past_or_today: bool,
}

pub async fn mask_date(Json(req): Json<MaskRequest>) -> Json<MaskResponse> {
    let masked = date::format_progressive_input(&req.raw);
    let storage = date::parse_masked_input(&masked, NaiveDate::MAX).map(|d| d.to_storage_string());
    Json(MaskResponse {
        progress: MaskProgress::of(&masked),
        past_or_today: date::is_past_or_today(storage.as_deref()),
        storage,
        masked,
    })
}

#[derive(Debug, Serialize)]
pub struct Menus {
    pub authenticated: bool,
    pub main: Vec<MenuItem>,
    pub user: Vec<MenuItem>,
    pub footer: Vec<MenuItem>,
}

pub async fn menus(
    State(state): State<AppState>,
    Extension(session): Extension<SessionState>,
) -> Json<Menus> {
    let menus = &state.config.menus;
    Json(Menus {
        authenticated: session.authenticated,
        main: filtered_main_menu(&menus.main, session.authenticated),
        user: filtered_user_menu(&menus.user, session.authenticated),
        footer: menus.footer.clone(),
    })
}

pub async fn private_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.config.menus.private.clone())
}

#[derive(Debug, Serialize)]
pub struct PublicConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub support_email: String,
    pub base_url: String,
    pub login_path: String,
    pub redirect_after_login: String,
    pub redirect_after_logout: String,
    pub session_timeout_secs: u64,
    pub refresh_threshold_secs: u64,
    pub ui: UiConfig,
}

pub async fn public_config(State(state): State<AppState>, headers: HeaderMap) -> Json<PublicConfig> {
    let config = &state.config;
    Json(PublicConfig {
        name: config.site.name.clone(),
        description: config.site.description.clone(),
        version: config.site.version.clone(),
        support_email: config.site.support_email.clone(),
        base_url: resolve_base_url(&config.site, Some(&headers)),
        login_path: config.auth.login_path.clone(),
        redirect_after_login: config.auth.redirect_after_login.clone(),
        redirect_after_logout: config.auth.redirect_after_logout.clone(),
        session_timeout_secs: config.auth.session_timeout_secs,
        refresh_threshold_secs: config.auth.refresh_threshold_secs,
        ui: config.ui.clone(),
    })
}

pub async fn validate_signup(Json(form): Json<SignupForm>) -> Result<Json<ValidSignup>, ApiError> {
    let valid = form.validate(Utc::now().date_naive())?;
    tracing::debug!(email = %valid.email, "Signup form accepted");
    Ok(Json(valid))
}

pub async fn validate_login(Json(form): Json<LoginForm>) -> Result<StatusCode, ApiError> {
    form.validate()?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct RawParams {
    pub raw: String,
}

pub async fn auth_error_message(Query(params): Query<RawParams>) -> Json<Value> {
    Json(json!({ "message": provider_error_message(&params.raw) }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
