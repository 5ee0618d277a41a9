//! Error taxonomy for token handling and authentication
//!
//! The variants are precise on purpose: callers log the exact kind, while the
//! HTTP layer collapses every rejection into one generic response.

use thiserror::Error;

/// Token issuance and verification failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Not three base64url segments, or a segment that does not decode
    #[error("Malformed token")]
    Malformed,

    /// Segments parse but the signature does not match header and payload
    #[error("Token signature verification failed")]
    InvalidSignature,

    /// Signature intact but the expiry instant has been reached
    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// True for the verification outcomes (as opposed to issuance failures)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::Malformed | TokenError::InvalidSignature | TokenError::Expired
        )
    }

    /// Stable identifier used in structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::Malformed => "malformed",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::Expired => "expired",
            TokenError::GenerationFailed => "generation_failed",
        }
    }
}

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user or wrong password; deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("User lookup service unavailable")]
    UserLookupUnavailable,
}
