//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gate.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the starter gate.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Public and protected route tables.
    pub routes: RoutesConfig,

    /// Session and redirect settings.
    pub auth: AuthConfig,

    /// Site identity and base URL.
    pub site: SiteConfig,

    /// Presentation settings handed to the frontend.
    pub ui: UiConfig,

    /// Navigation menus.
    pub menus: MenusConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Access policy applied to paths that appear in no route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAccess {
    Public,
    Protected,
}

/// Route tables used by the classifier.
///
/// Prefixes are plain string prefixes: `/login` also covers `/login-help`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Paths starting with any of these are public.
    pub public_prefixes: Vec<String>,

    /// Paths matching any of these regexes are public.
    pub public_patterns: Vec<String>,

    /// Paths starting with any of these require a session.
    pub protected_prefixes: Vec<String>,

    /// Policy for paths listed nowhere.
    pub default_access: DefaultAccess,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            public_prefixes: strings(&[
                "/",
                "/login",
                "/auth",
                "/forgot-password",
                "/reset-password",
                "/public",
                "/about",
                "/contact",
                "/terms",
                "/privacy",
                "/help",
                "/faq",
                "/api/public",
            ]),
            public_patterns: strings(&[r"^/public/.*$", r"^/api/public/.*$", r"^/blog/.*$"]),
            protected_prefixes: strings(&[
                "/private",
                "/dashboard",
                "/profile",
                "/admin",
                "/events/create",
                "/events/manage",
                "/guests",
                "/reports",
                "/settings",
                "/api/protected",
            ]),
            default_access: DefaultAccess::Protected,
        }
    }
}

/// Session detection and redirect targets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Cookie whose presence marks an authenticated session.
    pub session_cookie: String,

    /// Where anonymous visitors of protected pages are sent.
    pub login_path: String,

    /// Where an authenticated user lands after logging in.
    pub redirect_after_login: String,

    /// Where a user lands after logging out.
    pub redirect_after_logout: String,

    /// Session lifetime in seconds, forwarded to the auth provider.
    pub session_timeout_secs: u64,

    /// Refresh tokens this many seconds before expiry.
    pub refresh_threshold_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: "sb-access-token".to_string(),
            login_path: "/login".to_string(),
            redirect_after_login: "/private".to_string(),
            redirect_after_logout: "/".to_string(),
            session_timeout_secs: 24 * 60 * 60,
            refresh_threshold_secs: 5 * 60,
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    pub support_email: String,

    /// Forces `http://localhost:3000` as base URL.
    pub development: bool,

    /// Public base URL, e.g. "https://app.example.com".
    pub website_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Starter Project".to_string(),
            description: "A ready-to-use base project with authentication".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            support_email: "support@example.com".to_string(),
            development: false,
            website_url: None,
        }
    }
}

/// UI settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub language: String,
    pub date_format: String,
    pub time_format: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            language: "en".to_string(),
            date_format: "DD/MM/YYYY".to_string(),
            time_format: "HH:mm".to_string(),
            default_page_size: 10,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuItem {
    pub key: String,
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// `None` means always visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,

    /// Client-side action instead of navigation (e.g. "logout").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn link(key: &str, label: &str, path: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            path: Some(path.to_string()),
            icon: None,
            public: None,
            action: None,
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = Some(public);
        self
    }

    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }
}

/// Navigation menus.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MenusConfig {
    pub main: Vec<MenuItem>,
    pub user: Vec<MenuItem>,
    pub private: Vec<MenuItem>,
    pub footer: Vec<MenuItem>,
}

impl Default for MenusConfig {
    fn default() -> Self {
        let logout = MenuItem {
            key: "logout".to_string(),
            label: "Log out".to_string(),
            path: None,
            icon: Some("RiLogoutBoxLine".to_string()),
            public: None,
            action: Some("logout".to_string()),
            children: Vec::new(),
        };

        Self {
            main: vec![
                MenuItem::link("home", "Home", "/").icon("RiHomeLine").public(true),
                MenuItem::link("features", "Features", "/features")
                    .icon("RiRocketLine")
                    .public(true)
                    .children(vec![
                        MenuItem::link("features-browse", "Browse features", "/features").public(true),
                        MenuItem::link("features-create", "Create feature", "/features/create").public(false),
                        MenuItem::link("features-manage", "My features", "/features/manage").public(false),
                    ]),
                MenuItem::link("components", "Components", "/components")
                    .icon("RiCodeLine")
                    .public(false),
                MenuItem::link("about", "About", "/about").icon("RiInformationLine").public(true),
                MenuItem::link("contact", "Contact", "/contact").icon("RiMailLine").public(true),
            ],
            user: vec![
                MenuItem::link("profile", "My profile", "/profile").icon("RiUserLine"),
                MenuItem::link("settings", "Settings", "/settings").icon("RiSettings3Line"),
                MenuItem::link("help", "Help", "/help").icon("RiQuestionLine"),
                logout,
            ],
            private: vec![
                MenuItem::link("/private", "Dashboard", "/private").icon("RiDashboardLine"),
                MenuItem::link("/private/features", "Features", "/private/features").icon("RiRocketLine"),
                MenuItem::link("/private/components", "Components", "/private/components").icon("RiTeamLine"),
                MenuItem::link("/profile", "My profile", "/profile").icon("RiUserLine"),
            ],
            footer: vec![
                MenuItem::link("about", "About", "/about"),
                MenuItem::link("contact", "Contact", "/contact"),
                MenuItem::link("terms", "Terms and conditions", "/terms"),
                MenuItem::link("privacy", "Privacy policy", "/privacy"),
                MenuItem::link("help", "Help", "/help"),
            ],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GateConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "127.0.0.1:4000"

            [routes]
            default_access = "public"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:4000");
        assert_eq!(config.routes.default_access, DefaultAccess::Public);
        assert!(config.routes.public_prefixes.contains(&"/login".to_string()));
        assert_eq!(config.auth.login_path, "/login");
    }

    #[test]
    fn test_menu_item_without_visibility() {
        let config: GateConfig = toml::from_str(
            r#"
            [[menus.main]]
            key = "docs"
            label = "Docs"
            path = "/docs"
            "#,
        )
        .unwrap();

        assert_eq!(config.menus.main.len(), 1);
        assert_eq!(config.menus.main[0].public, None);
        assert!(config.menus.main[0].children.is_empty());
    }
}
