//! Login service: resolves credentials and mints access tokens

use std::sync::Arc;

use crate::domain::value_objects::LoginOutcome;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserLookup;
use crate::services::token::TokenAuthority;

use super::password::{timing_hash, PasswordVerifier, DEFAULT_HASH_COST};

/// Username/password login backed by a user lookup and the token authority
pub struct LoginService<U, P>
where
    U: UserLookup + ?Sized,
    P: PasswordVerifier + ?Sized + 'static,
{
    /// Source of stored credentials
    user_lookup: Arc<U>,
    /// Password hash checker
    password_verifier: Arc<P>,
    /// Token authority used to mint access tokens
    token_authority: Arc<TokenAuthority>,
    /// Well-formed hash checked for unknown usernames
    timing_hash: String,
}

impl<U, P> LoginService<U, P>
where
    U: UserLookup + ?Sized,
    P: PasswordVerifier + ?Sized + 'static,
{
    pub fn new(
        user_lookup: Arc<U>,
        password_verifier: Arc<P>,
        token_authority: Arc<TokenAuthority>,
    ) -> Self {
        Self {
            user_lookup,
            password_verifier,
            token_authority,
            timing_hash: timing_hash(DEFAULT_HASH_COST),
        }
    }

    /// Match the unknown-user path to the bcrypt cost of stored hashes
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.timing_hash = timing_hash(cost);
        self
    }

    pub fn token_authority(&self) -> &Arc<TokenAuthority> {
        &self.token_authority
    }

    /// Authenticate a user and issue an access token
    ///
    /// This method:
    /// 1. Rejects empty username or password
    /// 2. Resolves the username through the user lookup
    /// 3. Checks the password against the stored bcrypt hash
    /// 4. Issues a token carrying the resolved subject, username and roles
    ///
    /// Unknown users and wrong passwords fail with the same
    /// `AuthError::InvalidCredentials`. An unknown username still runs one
    /// password check against a placeholder hash so both paths cost the
    /// same bcrypt work.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - Token and the claims it carries
    /// * `Err(DomainError)` - Validation, credential, lookup or issuance failure
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<LoginOutcome> {
        if username.is_empty() {
            return Err(DomainError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }

        let credentials = match self.user_lookup.resolve(username).await? {
            Some(credentials) => credentials,
            None => {
                // Placeholder check, outcome discarded.
                let _ = self.check_password(password, self.timing_hash.clone()).await;
                tracing::info!(
                    username = username,
                    event = "login_failed",
                    reason = "unknown_user",
                    "Login rejected"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .check_password(password, credentials.password_hash.clone())
            .await?
        {
            tracing::info!(
                username = username,
                event = "login_failed",
                reason = "wrong_password",
                "Login rejected"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.token_authority.mint(
            &credentials.subject,
            &credentials.username,
            credentials.roles.iter().cloned(),
        )?;

        tracing::info!(
            username = username,
            subject = %issued.claims.sub,
            expires_at = ?issued.claims.expires_at(),
            event = "login_succeeded",
            "Issued access token"
        );

        Ok(LoginOutcome::from_issued(issued))
    }

    /// Runs the password check on the blocking pool
    async fn check_password(&self, password: &str, hash: String) -> DomainResult<bool> {
        let verifier = Arc::clone(&self.password_verifier);
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || verifier.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password check task failed: {}", e),
            })?
    }
}
