//! User lookup trait defining how login resolves credentials.
//!
//! The trait is async-first so implementations can call a remote
//! user-management service as easily as an in-process map.

use async_trait::async_trait;

use crate::domain::entities::UserCredentials;
use crate::errors::DomainError;

/// Resolves a username to stored credentials and role assignments
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use tg_core::repositories::UserLookup;
/// use tg_core::domain::entities::UserCredentials;
/// use tg_core::errors::DomainError;
///
/// struct StaticLookup;
///
/// #[async_trait]
/// impl UserLookup for StaticLookup {
///     async fn resolve(&self, username: &str) -> Result<Option<UserCredentials>, DomainError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find the credentials registered for `username`
    ///
    /// Matching is exact: no case folding or trimming.
    ///
    /// # Returns
    /// * `Ok(Some(UserCredentials))` - User found
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - The backing store could not answer
    async fn resolve(&self, username: &str) -> Result<Option<UserCredentials>, DomainError>;
}
