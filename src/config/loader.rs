//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GateConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GateConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: GateConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load the built-in defaults, still honouring environment overrides.
pub fn default_config() -> Result<GateConfig, ConfigError> {
    let mut config = GateConfig::default();
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply `DEVELOPMENT` / `NEXT_PUBLIC_DEVELOPMENT` and `WEBSITE_URL`.
pub fn apply_env_overrides<F>(config: &mut GateConfig, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    let development = ["DEVELOPMENT", "NEXT_PUBLIC_DEVELOPMENT"]
        .iter()
        .any(|key| var(key).as_deref() == Some("true"));
    if development {
        config.site.development = true;
    }

    if let Some(url) = var("WEBSITE_URL").filter(|u| !u.is_empty()) {
        config.site.website_url = Some(url);
    }
}
