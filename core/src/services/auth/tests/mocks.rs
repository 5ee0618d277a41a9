//! Test doubles for the login service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::entities::UserCredentials;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserLookup;
use crate::services::auth::PasswordVerifier;

/// Lookup whose backing service is always down
pub struct UnavailableUserLookup;

#[async_trait]
impl UserLookup for UnavailableUserLookup {
    async fn resolve(&self, _username: &str) -> Result<Option<UserCredentials>, DomainError> {
        Err(AuthError::UserLookupUnavailable.into())
    }
}

/// Password verifier that compares plaintext directly and counts calls
#[derive(Default)]
pub struct PlaintextPasswordVerifier {
    pub calls: AtomicUsize,
}

impl PlaintextPasswordVerifier {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PasswordVerifier for PlaintextPasswordVerifier {
    fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(plaintext == hash)
    }
}
