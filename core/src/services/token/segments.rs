//! Structural handling of the `header.payload.signature` wire format

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::de::DeserializeOwned;

use crate::errors::TokenError;

/// Borrowed view of the three token segments
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenSegments<'a> {
    /// `header.payload`, the exact bytes the signature covers
    pub signing_input: &'a str,
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenSegments<'a> {
    /// Splits a token, rejecting anything that is not three non-empty
    /// base64url segments
    pub(crate) fn split(token: &'a str) -> Result<Self, TokenError> {
        let mut parts = token.split('.');
        let (header, payload, signature) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(p), Some(s), None) => (h, p, s),
            _ => return Err(TokenError::Malformed),
        };

        if ![header, payload, signature].iter().all(|s| is_base64url(s)) {
            return Err(TokenError::Malformed);
        }

        Ok(Self {
            signing_input: &token[..header.len() + 1 + payload.len()],
            header,
            payload,
            signature,
        })
    }
}

fn is_base64url(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Decodes one base64url JSON segment
pub(crate) fn decode_json<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}
