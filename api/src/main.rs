use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use tg_api::app::create_app;
use tg_api::routes::auth::AppState;
use tg_api::{config, telemetry};
use tg_core::repositories::{InMemoryUserDirectory, UserLookup};
use tg_core::services::{BcryptPasswordVerifier, LoginService, PasswordVerifier, TokenAuthority};
use tg_infra::HttpUserLookupClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    telemetry::init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        algorithm = %config.auth.jwt.algorithm,
        expiration_ms = config.auth.jwt.expiration_ms,
        "Starting TenantGate API server"
    );
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET not set, using the development placeholder secret");
    }

    let token_authority = Arc::new(
        TokenAuthority::from_jwt_config(&config.auth.jwt)
            .context("Failed to initialize token authority")?,
    );

    let user_lookup: Arc<dyn UserLookup> = match &config.user_service {
        Some(user_service) => {
            info!(base_url = %user_service.base_url, "Using remote user-management service");
            Arc::new(
                HttpUserLookupClient::new(user_service)
                    .context("Failed to create user service client")?,
            )
        }
        None => {
            warn!("USER_SERVICE_URL not set, using an empty in-memory user directory");
            Arc::new(InMemoryUserDirectory::new())
        }
    };
    let password_verifier: Arc<dyn PasswordVerifier> = Arc::new(BcryptPasswordVerifier);

    let login_service = Arc::new(
        LoginService::new(user_lookup, password_verifier, token_authority)
            .with_password_cost(config.auth.password_hash_cost),
    );
    let app_state = web::Data::new(AppState::new(login_service));

    let bind_address = config.server.bind_address();
    info!(bind_address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error")
}
