//! # TenantGate Core
//!
//! Core domain layer for the TenantGate authentication service.
//! This crate contains the token authority, login and role checks, the user
//! lookup interface, and the error types shared by the outer layers.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::*;
pub use services::*;
pub use repositories::*;
pub use errors::*;
