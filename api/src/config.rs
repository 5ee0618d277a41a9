//! Startup configuration loading

use tg_shared::{AppConfig, ConfigError, Environment};

/// Load `.env` files and build the application configuration.
///
/// The environment-specific file (`.env.development`, ...) is read first so
/// its values win over the generic `.env`; real environment variables win
/// over both.
pub fn load() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();
    dotenvy::dotenv().ok();

    AppConfig::from_env()
}
