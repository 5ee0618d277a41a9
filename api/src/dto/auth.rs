use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::domain::entities::Claims;
use tg_core::domain::value_objects::LoginOutcome;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Exact username as registered
    #[validate(length(min = 1, max = 255))]
    pub username: String,

    #[validate(length(min = 1, max = 1024))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyTokenRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in milliseconds
    pub expires_in: i64,
}

impl From<LoginOutcome> for TokenResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            access_token: outcome.access_token,
            token_type: outcome.token_type,
            expires_in: outcome.expires_in_ms,
        }
    }
}

/// Verified identity of a token holder; timestamps are ms since epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub subject: String,
    pub username: String,
    pub roles: Vec<String>,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<Claims> for IdentityResponse {
    fn from(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            username: claims.username,
            roles: claims.roles,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

impl From<crate::middleware::AuthContext> for IdentityResponse {
    fn from(ctx: crate::middleware::AuthContext) -> Self {
        Self {
            subject: ctx.subject,
            username: ctx.username,
            roles: ctx.roles,
            issued_at: ctx.issued_at,
            expires_at: ctx.expires_at,
        }
    }
}
