//! Mapping of domain errors to HTTP responses
//!
//! Every authentication failure (bad credentials or any token rejection)
//! produces the same 401 body so clients cannot tell the causes apart.

use actix_web::{http::StatusCode, HttpResponse};
use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Token(TokenError::GenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        DomainError::Auth(AuthError::InsufficientPermissions) => StatusCode::FORBIDDEN,
        DomainError::Auth(AuthError::UserLookupUnavailable) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Configuration { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// The generic 401 response
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::unauthorized())
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if error.is_authentication_failure() {
        tracing::info!(error = %error, "Authentication failed");
        return unauthorized_response();
    }

    let body = match &error {
        DomainError::Validation { message } => {
            tracing::debug!(error = %error, "Request validation failed");
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
        }
        DomainError::Auth(AuthError::InsufficientPermissions) => {
            tracing::info!(error = %error, "Access denied");
            ErrorResponse::new(error_codes::FORBIDDEN, "Insufficient permissions")
        }
        DomainError::Auth(AuthError::UserLookupUnavailable) => {
            tracing::error!(error = %error, "Credential lookup unavailable");
            ErrorResponse::new(
                error_codes::SERVICE_UNAVAILABLE,
                "Service temporarily unavailable. Please try again later",
            )
        }
        _ => {
            // Internal details stay in the log.
            tracing::error!(error = ?error, "Unhandled domain error");
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    };

    HttpResponse::build(status).json(body)
}

/// 400 response listing field validation failures
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("validation_errors", errors),
    )
}
