//! Configuration module with service-specific sub-modules
//!
//! - `auth` - JWT signing and token lifetime configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind configuration
//! - `user_service` - Remote user-management client configuration

pub mod auth;
pub mod environment;
pub mod server;
pub mod user_service;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use user_service::UserServiceConfig;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {key}")]
    Missing { key: String },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Remote user-management service; `None` selects the in-memory directory
    #[serde(default)]
    pub user_service: Option<UserServiceConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            auth: AuthConfig::default(),
            user_service: None,
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `from_env` is the production entry point; tests pass a map-backed
    /// closure so they never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup)?;

        let mut logging = LoggingConfig::for_environment(environment);
        if let Some(level) = lookup("LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            logging.format = format
                .parse()
                .map_err(|e: String| ConfigError::invalid("LOG_FORMAT", e))?;
        }

        let config = Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
            user_service: UserServiceConfig::from_lookup(&lookup)?,
            logging,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-cutting invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.validate()?;
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(ConfigError::invalid(
                "JWT_SECRET",
                "the development placeholder secret cannot be used in production",
            ));
        }
        Ok(())
    }
}

/// Parse an optional numeric setting, keeping `default` when absent
pub(crate) fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string())),
        None => Ok(default),
    }
}
