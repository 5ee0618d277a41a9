//! Token authority module
//!
//! This module mints and verifies signed access tokens:
//! - HMAC-signed `header.payload.signature` tokens (HS256/HS384/HS512)
//! - Millisecond-precision issue and expiry timestamps
//! - An injectable clock so expiry can be exercised deterministically

mod authority;
mod clock;
mod config;
mod segments;

#[cfg(test)]
mod tests;

pub use authority::TokenAuthority;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TokenAuthorityConfig;
