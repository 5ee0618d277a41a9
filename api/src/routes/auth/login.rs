use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::repositories::UserLookup;
use tg_core::services::PasswordVerifier;

use crate::dto::auth::{LoginRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, validation_error_response};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Exchanges a username and password for an access token.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "alice",
///     "password": "..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9...",
///     "token_type": "Bearer",
///     "expires_in": 3600000
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing username or password
/// - 401 Unauthorized: Unknown user or wrong password
/// - 503 Service Unavailable: Credential lookup failed
pub async fn login<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserLookup + ?Sized + 'static,
    P: PasswordVerifier + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .login_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(TokenResponse::from(outcome)),
        Err(e) => handle_domain_error(e),
    }
}
