//! Business services containing domain logic and use cases.

pub mod access;
pub mod auth;
pub mod token;

// Re-export commonly used types
pub use access::RoleRequirement;
pub use auth::{hash_password, BcryptPasswordVerifier, LoginService, PasswordVerifier};
pub use token::{Clock, ManualClock, SystemClock, TokenAuthority, TokenAuthorityConfig};
