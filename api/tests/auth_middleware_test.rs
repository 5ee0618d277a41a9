//! Integration tests for JWT authentication middleware

mod common;

use actix_web::{test, web, App, HttpResponse};
use tg_api::middleware::auth::{AuthContext, JwtAuth, OptionalAuth};
use tg_core::services::{TokenAuthority, TokenAuthorityConfig};

use common::{bearer, fixture, generic_unauthorized_matches, LIFETIME_MS};

async fn protected_handler(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "subject": auth.subject,
        "roles": auth.roles,
    }))
}

#[actix_web::test]
async fn test_middleware_requires_auth_header() {
    let fx = fixture();
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(fx.authority.clone()))
            .route("/protected", web::get().to(protected_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(generic_unauthorized_matches(&body));
}

#[actix_web::test]
async fn test_middleware_accepts_valid_token() {
    let fx = fixture();
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(fx.authority.clone()))
            .route("/protected", web::get().to(protected_handler)),
    )
    .await;
    let token = fx.authority.issue("u-123", "alice", ["ADMIN", "USER"]).unwrap();

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(bearer(&token))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["subject"], "u-123");
    assert_eq!(body["roles"], serde_json::json!(["ADMIN", "USER"]));
}

#[actix_web::test]
async fn test_every_rejection_has_identical_body() {
    let fx = fixture();
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(fx.authority.clone()))
            .route("/protected", web::get().to(protected_handler)),
    )
    .await;

    let valid = fx.authority.issue("u-123", "alice", ["USER"]).unwrap();
    let mut tampered = valid.clone().into_bytes();
    tampered[5] = if tampered[5] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();
    let expired = fx.authority.issue("u-123", "alice", ["USER"]).unwrap();

    let mut bodies = Vec::new();

    let headers = [
        None,
        Some("Basic dXNlcjpwYXNz".to_string()),
        Some("Bearer garbage".to_string()),
        Some(format!("Bearer {}", tampered)),
    ];
    for header in headers {
        let mut req = test::TestRequest::get().uri("/protected");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        bodies.push((body["error"].clone(), body["message"].clone()));
    }

    fx.clock.advance(LIFETIME_MS);
    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(bearer(&expired))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = test::read_body_json(resp).await;
    bodies.push((body["error"].clone(), body["message"].clone()));

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[actix_web::test]
async fn test_token_from_other_secret_is_rejected() {
    let fx = fixture();
    let other = authority_with_secret("another-secret");
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(fx.authority.clone()))
            .route("/protected", web::get().to(protected_handler)),
    )
    .await;
    let token = other.issue("u-123", "alice", ["ADMIN"]).unwrap();

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_auth_context_extractor_without_middleware() {
    let app = test::init_service(App::new().route("/protected", web::get().to(protected_handler))).await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_optional_auth_without_middleware() {
    async fn handler(auth: OptionalAuth) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "authenticated": auth.0.is_some() }))
    }
    let app = test::init_service(App::new().route("/maybe", web::get().to(handler))).await;

    let req = test::TestRequest::get().uri("/maybe").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["authenticated"], false);
}

fn authority_with_secret(secret: &str) -> TokenAuthority {
    TokenAuthority::with_system_clock(TokenAuthorityConfig::new(secret, LIFETIME_MS)).unwrap()
}
