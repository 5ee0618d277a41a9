//! Credential & token authority: mints and verifies signed access tokens

use std::sync::Arc;

use jsonwebtoken::{crypto, encode, Algorithm, DecodingKey, EncodingKey, Header};
use tg_shared::JwtConfig;

use crate::domain::entities::Claims;
use crate::domain::value_objects::IssuedToken;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::clock::{Clock, SystemClock};
use super::config::TokenAuthorityConfig;
use super::segments::{decode_json, TokenSegments};

/// Issues and verifies HMAC-signed access tokens.
///
/// Keys are derived once from the configured secret at construction and the
/// authority is immutable afterwards, so it can be shared behind an `Arc`
/// by any number of request handlers.
pub struct TokenAuthority {
    algorithm: Algorithm,
    expiration_ms: i64,
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl TokenAuthority {
    /// Creates a token authority
    ///
    /// # Arguments
    ///
    /// * `config` - Signing secret, lifetime and algorithm
    /// * `clock` - Time source used for `iat` and the expiry check
    ///
    /// # Returns
    ///
    /// * `Ok(TokenAuthority)` - Keys derived and ready
    /// * `Err(DomainError::Configuration)` - Empty secret, non-positive
    ///   lifetime, or a non-HMAC algorithm
    pub fn new(config: TokenAuthorityConfig, clock: Arc<dyn Clock>) -> DomainResult<Self> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Ok(Self {
            algorithm: config.algorithm,
            expiration_ms: config.expiration_ms,
            header: Header::new(config.algorithm),
            encoding_key,
            decoding_key,
            clock,
        })
    }

    /// Creates a token authority driven by the wall clock
    pub fn with_system_clock(config: TokenAuthorityConfig) -> DomainResult<Self> {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Creates a token authority from the shared JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> DomainResult<Self> {
        Self::with_system_clock(TokenAuthorityConfig::from_jwt_config(jwt)?)
    }

    /// Token lifetime in milliseconds
    pub fn expiration_ms(&self) -> i64 {
        self.expiration_ms
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Mints a signed token for a principal
    ///
    /// # Arguments
    ///
    /// * `subject` - Unique principal identifier (non-empty)
    /// * `username` - Username snapshot (non-empty)
    /// * `roles` - Role names, order preserved, may be empty
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Empty subject/username, or signing failed
    pub fn issue<I, S>(&self, subject: &str, username: &str, roles: I) -> DomainResult<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mint(subject, username, roles).map(|issued| issued.token)
    }

    /// Same as [`issue`](Self::issue) but also returns the encoded claims
    pub fn mint<I, S>(&self, subject: &str, username: &str, roles: I) -> DomainResult<IssuedToken>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if subject.is_empty() {
            return Err(DomainError::validation("Token subject must not be empty"));
        }
        if username.is_empty() {
            return Err(DomainError::validation("Token username must not be empty"));
        }

        let issued_at = self.clock.now_millis();
        let claims = Claims::new(subject, username, roles, issued_at, self.expiration_ms)
            .ok_or(TokenError::GenerationFailed)?;

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verifies a token and returns its claims
    ///
    /// Checks run in a fixed order: structure, signature, decoding, expiry.
    /// The signature covers the raw `header.payload` text, so any edit to
    /// either segment surfaces as `InvalidSignature`.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature intact and not yet expired
    /// * `Err(TokenError::Malformed)` - Not three base64url segments, or
    ///   undecodable content
    /// * `Err(TokenError::InvalidSignature)` - Signature mismatch
    /// * `Err(TokenError::Expired)` - `exp` is at or before the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let segments = TokenSegments::split(token)?;

        let signature_ok = crypto::verify(
            segments.signature,
            segments.signing_input.as_bytes(),
            &self.decoding_key,
            self.algorithm,
        )
        .unwrap_or(false);
        if !signature_ok {
            return Err(TokenError::InvalidSignature);
        }

        let header: Header = decode_json(segments.header)?;
        if header.alg != self.algorithm {
            return Err(TokenError::InvalidSignature);
        }

        let claims: Claims = decode_json(segments.payload)?;
        if claims.is_expired_at(self.clock.now_millis()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Verifies the token and returns its subject
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.verify(token).map(|claims| claims.sub)
    }

    /// Verifies the token and returns its username
    pub fn extract_username(&self, token: &str) -> Result<String, TokenError> {
        self.verify(token).map(|claims| claims.username)
    }

    /// Verifies the token and returns its roles in issuance order
    pub fn extract_roles(&self, token: &str) -> Result<Vec<String>, TokenError> {
        self.verify(token).map(|claims| claims.roles)
    }
}

impl std::fmt::Debug for TokenAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("algorithm", &self.algorithm)
            .field("expiration_ms", &self.expiration_ms)
            .field("clock", &self.clock)
            .finish()
    }
}
