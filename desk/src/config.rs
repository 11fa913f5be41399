//! # Desk Configuration
//!
//! Start-up configuration loaded from environment variables (after an optional
//! `.env` file is read by `dotenvy`). Invalid values fail fast at start-up.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `FREIGHT_DESK_ENV` | `development` | `development` or `production`; selects the API base URL |
//! | `FREIGHT_DESK_API_URL` | per environment | explicit API base URL override |
//! | `FREIGHT_DESK_BACKEND` | `live` | `live` (HTTP API) or `mock` (in-memory demo data) |
//! | `FREIGHT_DESK_SESSION_FILE` | `./freight-desk-session.json` | persisted session keys |
//! | `FREIGHT_DESK_TIMEOUT_SECS` | unset | HTTP timeout; requests wait indefinitely when unset |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use freight_desk::config::{desk_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let base_url = &desk_config().api_base_url;
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{self, get_env_or};

use crate::core::{AppError, Result};

pub const DEVELOPMENT_API_URL: &str = "http://localhost:3001";
pub const PRODUCTION_API_URL: &str = "https://votre-api-prod.com";
pub const DEFAULT_SESSION_FILE: &str = "./freight-desk-session.json";

/// Build environment, as the web front end distinguished them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn default_api_url(&self) -> &'static str {
        match self {
            Environment::Development => DEVELOPMENT_API_URL,
            Environment::Production => PRODUCTION_API_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(AppError::Config(format!("FREIGHT_DESK_ENV inconnu: {other}"))),
        }
    }
}

/// Which [`ApiService`](crate::core::ApiService) implementation backs the dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendMode {
    #[default]
    Live,
    Mock,
}

impl FromStr for BackendMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(BackendMode::Live),
            "mock" => Ok(BackendMode::Mock),
            other => Err(AppError::Config(format!("FREIGHT_DESK_BACKEND inconnu: {other}"))),
        }
    }
}

/// Desk configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    pub environment: Environment,
    /// Base URL every API path is appended to, without trailing slash
    pub api_base_url: String,
    pub backend: BackendMode,
    /// JSON file holding the persisted session keys
    pub session_file: PathBuf,
    /// `None` means no client-side timeout
    pub request_timeout: Option<Duration>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            api_base_url: DEVELOPMENT_API_URL.to_string(),
            backend: BackendMode::Live,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            request_timeout: None,
        }
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let environment: Environment = get_env_or("FREIGHT_DESK_ENV", "development").parse()?;
        let api_base_url = get_env_or("FREIGHT_DESK_API_URL", environment.default_api_url())
            .trim_end_matches('/')
            .to_string();
        let backend: BackendMode = get_env_or("FREIGHT_DESK_BACKEND", "live").parse()?;
        let session_file = PathBuf::from(get_env_or("FREIGHT_DESK_SESSION_FILE", DEFAULT_SESSION_FILE));

        let request_timeout = match envs::get_env_parse::<u64>("FREIGHT_DESK_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(envs::Error::MissingEnv(_)) => None,
            Err(envs::Error::WrongFormat(name)) => {
                return Err(AppError::Config(format!("{name} doit être un nombre de secondes")))
            }
        };

        Ok(Self {
            environment,
            api_base_url,
            backend,
            session_file,
            request_timeout,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "FREIGHT_DESK_API_URL doit commencer par http:// ou https:// ({})",
                self.api_base_url
            )));
        }

        if self.request_timeout == Some(Duration::ZERO) {
            return Err(AppError::Config("FREIGHT_DESK_TIMEOUT_SECS doit être positif".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<DeskConfig> = OnceLock::new();

/// Load `.env`, read and validate the configuration, and install it globally.
///
/// # Errors
///
/// Returns [`AppError::Config`] when a variable is invalid or the
/// configuration was already initialized.
pub fn init_config() -> Result<&'static DeskConfig> {
    dotenvy::dotenv().ok();

    let config = DeskConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    Ok(desk_config())
}

/// Get the global configuration.
///
/// Falls back to [`DeskConfig::default`] when [`init_config`] was never called,
/// which is the case in unit tests.
pub fn desk_config() -> &'static DeskConfig {
    CONFIG.get_or_init(DeskConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_selects_base_url() {
        assert_eq!(Environment::Development.default_api_url(), "http://localhost:3001");
        assert_eq!(Environment::Production.default_api_url(), "https://votre-api-prod.com");
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_backend_mode_parse() {
        assert_eq!("mock".parse::<BackendMode>().unwrap(), BackendMode::Mock);
        assert_eq!(" Live ".parse::<BackendMode>().unwrap(), BackendMode::Live);
        assert!("fake".parse::<BackendMode>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DeskConfig::default();
        assert!(config.validate().is_ok());

        config.api_base_url = "localhost:3001".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        config.api_base_url = DEVELOPMENT_API_URL.to_string();
        config.request_timeout = Some(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
