//! End-to-end flow through the public core API: seed a directory, log in,
//! verify the token, check roles, and let the token expire.

use std::sync::Arc;

use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_core::repositories::InMemoryUserDirectory;
use tg_core::services::{
    hash_password, BcryptPasswordVerifier, LoginService, ManualClock, RoleRequirement,
    TokenAuthority, TokenAuthorityConfig,
};
use tg_core::domain::entities::UserCredentials;

const LIFETIME_MS: i64 = 3_600_000;

#[tokio::test]
async fn test_login_verify_authorize_and_expire() {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let authority = Arc::new(
        TokenAuthority::new(
            TokenAuthorityConfig::new("integration-secret", LIFETIME_MS),
            clock.clone(),
        )
        .unwrap(),
    );

    let directory = Arc::new(InMemoryUserDirectory::new());
    directory
        .insert(UserCredentials::new(
            "u-123",
            "alice",
            hash_password("wonderland", 4).unwrap(),
            ["ADMIN", "USER"],
        ))
        .await;
    directory
        .insert(UserCredentials::new(
            "u-200",
            "bob",
            hash_password("builder", 4).unwrap(),
            ["USER"],
        ))
        .await;

    let service = LoginService::new(directory, Arc::new(BcryptPasswordVerifier), authority.clone())
        .with_password_cost(4);
    let admin_only = RoleRequirement::any_of(["ADMIN"]);

    let alice = service.login("alice", "wonderland").await.unwrap();
    let bob = service.login("bob", "builder").await.unwrap();

    let alice_roles = authority.extract_roles(&alice.access_token).unwrap();
    let bob_roles = authority.extract_roles(&bob.access_token).unwrap();
    assert!(admin_only.check(&alice_roles).is_ok());
    assert!(matches!(
        admin_only.check(&bob_roles),
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));

    clock.advance(LIFETIME_MS - 1);
    assert_eq!(authority.extract_subject(&alice.access_token).unwrap(), "u-123");

    clock.advance(1);
    assert_eq!(
        authority.verify(&alice.access_token).unwrap_err(),
        TokenError::Expired
    );

    // A fresh login after expiry yields a new, valid token.
    let renewed = service.login("alice", "wonderland").await.unwrap();
    assert_ne!(renewed.access_token, alice.access_token);
    assert!(authority.verify(&renewed.access_token).is_ok());
}

#[tokio::test]
async fn test_tokens_are_bound_to_the_issuing_secret() {
    let issuer = TokenAuthority::with_system_clock(TokenAuthorityConfig::new("one", 60_000)).unwrap();
    let other = TokenAuthority::with_system_clock(TokenAuthorityConfig::new("two", 60_000)).unwrap();

    let token = issuer.issue("u-1", "alice", ["USER"]).unwrap();

    assert!(issuer.verify(&token).is_ok());
    assert_eq!(other.verify(&token).unwrap_err(), TokenError::InvalidSignature);
}
