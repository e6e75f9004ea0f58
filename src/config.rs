//! Application configuration.
//!
//! The dashboard runs in the browser, so values are read from the build environment with
//! `option_env!` and validated once at startup. The resulting [`AppConfig`] is handed to the
//! launch builder as a context value instead of living in a global.

use dioxus_logger::tracing::Level;

use crate::{error::config::ConfigError, routing::RouteTable};

pub const DEFAULT_MOUNT_POINT: &str = "app";

/// Deployment environment, mirrors the backend's `dev`/`staging`/`test`/production split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Test,
    Production,
}

impl Environment {
    /// Non-production environments log at DEBUG, production at INFO.
    pub fn log_level(&self) -> Level {
        match self {
            Self::Dev | Self::Staging | Self::Test => Level::DEBUG,
            Self::Production => Level::INFO,
        }
    }
}

impl Environment {
    /// Maps an `APP_ENV` value to an environment; unknown values are treated as production.
    pub fn from_env_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Self::Dev,
            "staging" => Self::Staging,
            "test" => Self::Test,
            _ => Self::Production,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    /// Base URL of the auth API, empty for same-origin requests.
    pub api_url: String,
    /// Id of the DOM element the root view is mounted on.
    pub mount_point: String,
    pub routes: RouteTable,
}

impl AppConfig {
    /// Reads `APP_ENV`, `API_URL` and `MOUNT_POINT` as captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("APP_ENV"),
            option_env!("API_URL"),
            option_env!("MOUNT_POINT"),
        )
    }

    pub fn from_vars(
        app_env: Option<&str>,
        api_url: Option<&str>,
        mount_point: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let environment = app_env
            .map(Environment::from_env_str)
            .unwrap_or(Environment::Production);

        let api_url = validate_api_url(api_url.unwrap_or_default())?;
        let mount_point = validate_mount_point(mount_point.unwrap_or(DEFAULT_MOUNT_POINT))?;

        Ok(Self {
            environment,
            api_url,
            mount_point,
            routes: RouteTable::standard(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            api_url: String::new(),
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
            routes: RouteTable::standard(),
        }
    }
}

fn validate_api_url(value: &str) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/');

    if value.is_empty()
        || value.starts_with('/')
        || value.starts_with("http://")
        || value.starts_with("https://")
    {
        return Ok(value.to_string());
    }

    Err(ConfigError::InvalidEnvValue {
        var: "API_URL".to_string(),
        reason: format!("{:?} is neither a path nor an http(s) URL", value),
    })
}

fn validate_mount_point(value: &str) -> Result<String, ConfigError> {
    let value = value.trim();

    if value.is_empty() || value.starts_with('#') || value.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvValue {
            var: "MOUNT_POINT".to_string(),
            reason: format!("{:?} is not a valid element id", value),
        });
    }

    Ok(value.to_string())
}
