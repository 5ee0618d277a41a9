//! Authentication route handlers
//!
//! - Username/password login
//! - Token verification for downstream services
//! - Identity of the current caller

pub mod login;
pub mod me;
pub mod verify;

use std::sync::Arc;

use tg_core::repositories::UserLookup;
use tg_core::services::{LoginService, PasswordVerifier, TokenAuthority};

/// Application state that holds shared services
pub struct AppState<U, P>
where
    U: UserLookup + ?Sized,
    P: PasswordVerifier + ?Sized + 'static,
{
    pub login_service: Arc<LoginService<U, P>>,
    pub token_authority: Arc<TokenAuthority>,
}

impl<U, P> AppState<U, P>
where
    U: UserLookup + ?Sized,
    P: PasswordVerifier + ?Sized + 'static,
{
    pub fn new(login_service: Arc<LoginService<U, P>>) -> Self {
        let token_authority = Arc::clone(login_service.token_authority());
        Self {
            login_service,
            token_authority,
        }
    }
}
