//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use tg_api::routes::auth::AppState;
use tg_core::domain::entities::UserCredentials;
use tg_core::repositories::InMemoryUserDirectory;
use tg_core::services::{
    hash_password, BcryptPasswordVerifier, LoginService, ManualClock, TokenAuthority,
    TokenAuthorityConfig,
};

pub const SECRET: &str = "api-test-secret";
pub const LIFETIME_MS: i64 = 3_600_000;
pub const START_MS: i64 = 1_700_000_000_000;

pub type TestState = AppState<InMemoryUserDirectory, BcryptPasswordVerifier>;

pub struct Fixture {
    pub state: web::Data<TestState>,
    pub authority: Arc<TokenAuthority>,
    pub clock: Arc<ManualClock>,
}

/// Directory with `alice` (ADMIN, USER) and `bob` (USER)
pub fn fixture() -> Fixture {
    let clock = Arc::new(ManualClock::new(START_MS));
    let authority = Arc::new(
        TokenAuthority::new(TokenAuthorityConfig::new(SECRET, LIFETIME_MS), clock.clone())
            .unwrap(),
    );
    let directory = InMemoryUserDirectory::with_users([
        UserCredentials::new(
            "u-123",
            "alice",
            hash_password("wonderland", 4).unwrap(),
            ["ADMIN", "USER"],
        ),
        UserCredentials::new("u-200", "bob", hash_password("builder", 4).unwrap(), ["USER"]),
    ]);
    let login_service = Arc::new(
        LoginService::new(
            Arc::new(directory),
            Arc::new(BcryptPasswordVerifier),
            authority.clone(),
        )
        .with_password_cost(4),
    );

    Fixture {
        state: web::Data::new(AppState::new(login_service)),
        authority,
        clock,
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn generic_unauthorized_matches(body: &serde_json::Value) -> bool {
    body["error"] == "UNAUTHORIZED" && body["message"] == "Authentication required"
}
