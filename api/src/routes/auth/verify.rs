use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::repositories::UserLookup;
use tg_core::services::PasswordVerifier;

use crate::dto::auth::{IdentityResponse, VerifyTokenRequest};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/auth/verify
///
/// Verification endpoint for resource services that do not hold the
/// signing secret. Returns the token's identity claims.
///
/// ## Errors
/// - 400 Bad Request: Empty token field
/// - 401 Unauthorized: Malformed, tampered or expired token (one generic body)
pub async fn verify<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<VerifyTokenRequest>,
) -> HttpResponse
where
    U: UserLookup + ?Sized + 'static,
    P: PasswordVerifier + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.token_authority.verify(&request.token) {
        Ok(claims) => HttpResponse::Ok().json(IdentityResponse::from(claims)),
        Err(e) => {
            tracing::info!(
                event = "token_introspection_rejected",
                reason = e.kind(),
                "Token failed verification"
            );
            handle_domain_error(e.into())
        }
    }
}
