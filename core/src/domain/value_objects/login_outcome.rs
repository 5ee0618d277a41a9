//! Results of token issuance and login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Claims;

/// Token type reported to clients
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// A freshly minted token together with the claims it encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Successful login result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Signed access token
    pub access_token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Token lifetime in milliseconds
    pub expires_in_ms: i64,

    /// Claims encoded in `access_token`
    pub claims: Claims,
}

impl LoginOutcome {
    pub fn from_issued(issued: IssuedToken) -> Self {
        Self {
            expires_in_ms: issued.claims.exp - issued.claims.iat,
            access_token: issued.token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            claims: issued.claims,
        }
    }
}
