//! Configuration for the token authority

use std::str::FromStr;

use jsonwebtoken::Algorithm;
use tg_shared::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// Immutable signing configuration handed to [`super::TokenAuthority`]
#[derive(Clone)]
pub struct TokenAuthorityConfig {
    /// Shared signing secret
    pub secret: String,
    /// Token lifetime in milliseconds
    pub expiration_ms: i64,
    /// HMAC algorithm
    pub algorithm: Algorithm,
}

impl TokenAuthorityConfig {
    /// HS256 configuration
    pub fn new(secret: impl Into<String>, expiration_ms: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_ms,
            algorithm: Algorithm::HS256,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Builds the configuration from the shared JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> DomainResult<Self> {
        jwt.validate()?;
        let algorithm = Algorithm::from_str(&jwt.algorithm).map_err(|_| {
            DomainError::configuration(format!("Unknown JWT algorithm: {}", jwt.algorithm))
        })?;
        Ok(Self {
            secret: jwt.secret.clone(),
            expiration_ms: jwt.expiration_ms,
            algorithm,
        })
    }

    /// Checks secret, lifetime and algorithm family
    pub fn validate(&self) -> DomainResult<()> {
        if self.secret.is_empty() {
            return Err(DomainError::configuration("JWT secret must not be empty"));
        }
        if self.expiration_ms <= 0 {
            return Err(DomainError::configuration(format!(
                "Token expiration must be greater than zero, got {} ms",
                self.expiration_ms
            )));
        }
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::configuration(format!(
                "Unsupported signing algorithm {:?}, expected HS256, HS384 or HS512",
                self.algorithm
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for TokenAuthorityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthorityConfig")
            .field("secret", &"<redacted>")
            .field("expiration_ms", &self.expiration_ms)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
