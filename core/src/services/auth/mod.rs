//! Authentication service module
//!
//! - Username/password login that issues access tokens
//! - bcrypt password hashing and verification

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, BcryptPasswordVerifier, PasswordVerifier};
pub use service::LoginService;
