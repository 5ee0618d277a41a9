//! # Infrastructure Layer
//!
//! Concrete implementations of the core interfaces that talk to systems
//! outside this process.
//!
//! ## Architecture
//!
//! - **User service**: `reqwest` client resolving credentials from the
//!   user-management service, implementing `tg_core::repositories::UserLookup`

// Re-export core types for convenience
pub use tg_core::errors::*;

/// User service module - HTTP credential lookup
pub mod user_service;

pub use user_service::HttpUserLookupClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream answered with a status we do not handle
    #[error("Unexpected response status {status} from {service}")]
    UnexpectedStatus { service: &'static str, status: u16 },

    /// Upstream body could not be decoded
    #[error("Invalid response body: {0}")]
    Decode(String),
}
