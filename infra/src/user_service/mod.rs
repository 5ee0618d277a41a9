//! User-management service integration
//!
//! Resolves usernames to credentials over HTTP:
//!
//! `GET {base_url}/api/v1/users/by-username/{username}`
//!
//! - `200` with `{ "id", "username", "password_hash", "roles" }`
//! - `404` when the user does not exist
//! - anything else is treated as the service being unavailable

mod client;


pub use client::{HttpUserLookupClient, UserRecord};
