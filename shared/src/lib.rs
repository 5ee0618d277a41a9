//! Shared utilities and common types for TenantGate services
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (JWT, server, user-service client, logging)
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, Environment, JwtConfig, LoggingConfig, ServerConfig,
    UserServiceConfig,
};
pub use errors::{error_codes, ErrorResponse};
