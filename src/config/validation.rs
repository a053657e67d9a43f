//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route tables (prefixes are absolute, patterns compile)
//! - Detect a login path that the guard would itself protect
//! - Validate value ranges (timeouts > 0, page sizes present)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use regex::Regex;
use thiserror::Error;

use crate::config::schema::GateConfig;

/// A single semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route prefix '{0}' must start with '/'")]
    RelativePrefix(String),

    #[error("public pattern '{pattern}' does not compile: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("login path '{0}' is protected and would redirect to itself")]
    ProtectedLoginPath(String),

    #[error("{field} must be an absolute path, got '{value}'")]
    RelativeRedirect { field: &'static str, value: String },

    #[error("website_url '{0}' is not a valid URL")]
    InvalidWebsiteUrl(String),

    #[error("session_cookie must not be empty")]
    EmptySessionCookie,

    #[error("ui.page_size_options must not be empty")]
    NoPageSizes,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let routes = &config.routes;

    for prefix in routes.public_prefixes.iter().chain(&routes.protected_prefixes) {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::RelativePrefix(prefix.clone()));
        }
    }

    for pattern in &routes.public_patterns {
        if let Err(e) = Regex::new(pattern) {
            errors.push(ValidationError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            });
        }
    }

    let auth = &config.auth;
    for (field, value) in [
        ("auth.login_path", &auth.login_path),
        ("auth.redirect_after_login", &auth.redirect_after_login),
        ("auth.redirect_after_logout", &auth.redirect_after_logout),
    ] {
        if !value.starts_with('/') {
            errors.push(ValidationError::RelativeRedirect {
                field,
                value: value.clone(),
            });
        }
    }

    if routes
        .protected_prefixes
        .iter()
        .any(|p| auth.login_path.starts_with(p.as_str()))
    {
        errors.push(ValidationError::ProtectedLoginPath(auth.login_path.clone()));
    }

    if auth.session_cookie.trim().is_empty() {
        errors.push(ValidationError::EmptySessionCookie);
    }

    if let Some(url) = &config.site.website_url {
        if url::Url::parse(url).is_err() {
            errors.push(ValidationError::InvalidWebsiteUrl(url.clone()));
        }
    }

    if config.ui.page_size_options.is_empty() {
        errors.push(ValidationError::NoPageSizes);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GateConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GateConfig::default();
        config.routes.public_prefixes.push("blog".into());
        config.routes.public_patterns.push("^/broken(".into());
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::RelativePrefix("blog".into())));
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(matches!(errors[1], ValidationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_protected_login_path_rejected() {
        let mut config = GateConfig::default();
        config.routes.protected_prefixes.push("/log".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ProtectedLoginPath("/login".into())]);
    }

    #[test]
    fn test_bad_website_url() {
        let mut config = GateConfig::default();
        config.site.website_url = Some("not a url".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidWebsiteUrl("not a url".into())]);
    }
}
