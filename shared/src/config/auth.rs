//! Authentication and token-signing configuration

use serde::{Deserialize, Serialize};

use super::{parse_or, ConfigError};

/// Placeholder secret used when `JWT_SECRET` is not provided
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Default token lifetime: one hour
pub const DEFAULT_EXPIRATION_MS: i64 = 3_600_000;

/// bcrypt cost of stored password hashes (bcrypt's own default)
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Symmetric algorithms accepted for token signing
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used both to sign and to verify tokens
    pub secret: String,

    /// Token lifetime in milliseconds
    pub expiration_ms: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            expiration_ms: DEFAULT_EXPIRATION_MS,
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in milliseconds
    pub fn with_expiration_ms(mut self, expiration_ms: i64) -> Self {
        self.expiration_ms = expiration_ms;
        self
    }

    /// Set token lifetime in minutes, saturating at `i64::MAX` milliseconds
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.expiration_ms = minutes.saturating_mul(60_000);
        self
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }

    /// Validate secret, lifetime and algorithm
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::Missing {
                key: "JWT_SECRET".to_string(),
            });
        }
        if self.expiration_ms <= 0 {
            return Err(ConfigError::invalid(
                "JWT_EXPIRATION_MS",
                format!("must be greater than zero, got {}", self.expiration_ms),
            ));
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            return Err(ConfigError::invalid(
                "JWT_ALGORITHM",
                format!(
                    "unsupported algorithm {}, expected one of {:?}",
                    self.algorithm, SUPPORTED_ALGORITHMS
                ),
            ));
        }
        Ok(())
    }

    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            secret: lookup("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            expiration_ms: parse_or(lookup, "JWT_EXPIRATION_MS", DEFAULT_EXPIRATION_MS)?,
            algorithm: lookup("JWT_ALGORITHM")
                .map(|a| a.trim().to_uppercase())
                .unwrap_or_else(default_algorithm),
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost of stored password hashes (4..=31)
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password_hash_cost: DEFAULT_PASSWORD_HASH_COST,
        }
    }
}

impl AuthConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jwt: JwtConfig::from_lookup(lookup)?,
            password_hash_cost: parse_or(
                lookup,
                "PASSWORD_HASH_COST",
                DEFAULT_PASSWORD_HASH_COST,
            )?,
        })
    }

    /// Validate the JWT settings and the bcrypt cost range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        if !(4..=31).contains(&self.password_hash_cost) {
            return Err(ConfigError::invalid(
                "PASSWORD_HASH_COST",
                format!("must be between 4 and 31, got {}", self.password_hash_cost),
            ));
        }
        Ok(())
    }
}

fn default_password_hash_cost() -> u32 {
    DEFAULT_PASSWORD_HASH_COST
}

fn default_algorithm() -> String {
    String::from("HS256")
}
