//! Identity claims carried inside an access token.
//!
//! Timestamps (`iat`, `exp`) are milliseconds since the Unix epoch. The
//! serialized field names are part of the wire format shared with every
//! verifier and must not change.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: opaque unique identifier of the principal
    pub sub: String,

    /// Username at the time of issuance
    pub username: String,

    /// Role names held at issuance, in their original order
    pub roles: Vec<String>,

    /// Issued-at, ms since epoch
    pub iat: i64,

    /// Expiry, ms since epoch
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a principal issued at `issued_at_ms`.
    ///
    /// Returns `None` when `issued_at_ms + lifetime_ms` overflows.
    pub fn new<I, S>(
        subject: impl Into<String>,
        username: impl Into<String>,
        roles: I,
        issued_at_ms: i64,
        lifetime_ms: i64,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let exp = issued_at_ms.checked_add(lifetime_ms)?;
        Some(Self {
            sub: subject.into(),
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            iat: issued_at_ms,
            exp,
        })
    }

    /// Expired once `now_ms` reaches `exp`
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.exp
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.iat).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.exp).single()
    }
}
