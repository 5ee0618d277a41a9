//! Repository interfaces for resolving user credentials.

pub mod user;

pub use user::{InMemoryUserDirectory, UserLookup};
