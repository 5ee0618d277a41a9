//! Configuration for the remote user-management service

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// Default request timeout for user lookups
pub const DEFAULT_USER_SERVICE_TIMEOUT_SECS: u64 = 5;

/// Location and timeouts of the user-management service used for credential lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserServiceConfig {
    /// Base URL, e.g. `http://user-management:8081`
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UserServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_USER_SERVICE_TIMEOUT_SECS,
        }
    }

    /// Returns `None` when `USER_SERVICE_URL` is unset or blank
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("USER_SERVICE_URL") {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => return Ok(None),
        };
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "USER_SERVICE_URL",
                "must start with http:// or https://",
            ));
        }
        let timeout_secs = parse_or(
            lookup,
            "USER_SERVICE_TIMEOUT_SECS",
            DEFAULT_USER_SERVICE_TIMEOUT_SECS,
        )?;
        Ok(Some(Self {
            base_url,
            timeout_secs,
        }))
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_USER_SERVICE_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_means_no_remote_service() {
        let lookup = |key: &str| (key == "USER_SERVICE_URL").then(|| "  ".to_string());
        assert_eq!(UserServiceConfig::from_lookup(&lookup).unwrap(), None);
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let lookup = |key: &str| (key == "USER_SERVICE_URL").then(|| "users:8081".to_string());
        assert!(UserServiceConfig::from_lookup(&lookup).is_err());
    }
}
