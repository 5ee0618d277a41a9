//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the shared token authority, and injects the caller's
//! identity into the request extensions.
//!
//! Every failure produces the same 401 body. The precise reason is only
//! written to the log.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tg_core::{
    domain::entities::Claims,
    errors::{DomainError, TokenError},
    services::{RoleRequirement, TokenAuthority},
};

use crate::handlers::error::unauthorized_response;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject of the verified token
    pub subject: String,
    pub username: String,
    /// Roles in issuance order
    pub roles: Vec<String>,
    /// Issued-at, ms since epoch
    pub issued_at: i64,
    /// Expiry, ms since epoch
    pub expires_at: i64,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
            username: claims.username,
            roles: claims.roles,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }

    /// Fails with `InsufficientPermissions` unless the requirement holds
    pub fn require_roles(&self, requirement: &RoleRequirement) -> Result<(), DomainError> {
        requirement.check(&self.roles)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    authority: Arc<TokenAuthority>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `authority`
    pub fn new(authority: Arc<TokenAuthority>) -> Self {
        Self { authority }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authority: Arc::clone(&self.authority),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authority: Arc<TokenAuthority>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authority = Arc::clone(&self.authority);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    tracing::debug!(
                        path = req.path(),
                        event = "auth_rejected",
                        reason = "missing_bearer",
                        "Request without bearer token"
                    );
                    return Ok(reject(req));
                }
            };

            let claims = match authority.verify(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log_rejection(req.path(), e);
                    return Ok(reject(req));
                }
            };

            req.extensions_mut().insert(AuthContext::from_claims(claims));

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(unauthorized_response())
        .map_into_right_body()
}

fn log_rejection(path: &str, error: TokenError) {
    match error {
        TokenError::InvalidSignature => tracing::warn!(
            path = path,
            event = "auth_rejected",
            reason = error.kind(),
            "Token signature mismatch, possible tampering"
        ),
        _ => tracing::info!(
            path = path,
            event = "auth_rejected",
            reason = error.kind(),
            "Token rejected"
        ),
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                actix_web::error::InternalError::from_response(
                    "Authentication required",
                    unauthorized_response(),
                )
                .into()
            });

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().cloned();
        ready(Ok(OptionalAuth(auth)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        use actix_web::test;

        let req = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req_no_bearer = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_empty = test::TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_srv_request();

        assert_eq!(extract_bearer_token(&req_empty), None);

        let req_no_header = test::TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }

    #[test]
    fn test_require_roles() {
        let ctx = AuthContext {
            subject: "u-1".to_string(),
            username: "alice".to_string(),
            roles: vec!["USER".to_string()],
            issued_at: 0,
            expires_at: 1,
        };

        assert!(ctx.require_roles(&RoleRequirement::any_of(["USER"])).is_ok());
        assert!(ctx.require_roles(&RoleRequirement::any_of(["ADMIN"])).is_err());
    }
}
