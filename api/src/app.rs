//! Application factory
//!
//! Builds the Actix-web application from already-constructed services so
//! the binary and the integration tests share one routing table.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use tg_core::errors::DomainError;
use tg_core::repositories::UserLookup;
use tg_core::services::PasswordVerifier;

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::JwtAuth;
use crate::routes::admin;
use crate::routes::auth::{login::login, me::me, verify::verify, AppState};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    app_state: web::Data<AppState<U, P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserLookup + ?Sized + 'static,
    P: PasswordVerifier + ?Sized + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_authority.clone());

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U, P>))
                        .route("/verify", web::post().to(verify::<U, P>))
                        .route("/me", web::get().to(me).wrap(jwt_auth.clone())),
                )
                .service(
                    web::scope("/admin")
                        .wrap(jwt_auth)
                        .route("/ping", web::get().to(admin::ping)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    handle_domain_error(DomainError::NotFound {
        resource: String::from("Resource"),
    })
}
