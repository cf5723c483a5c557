//! Environment-driven configuration. Two knobs only: listen port and
//! database DSN, per the kernel's External Interfaces contract.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in the environment or .env file");

        let port = match env::var("PORT") {
            Ok(val) => match val.parse::<u16>() {
                Ok(p) => p,
                Err(_) => {
                    log::warn!("Invalid PORT value '{val}' provided, defaulting to 8080.");
                    8080
                }
            },
            Err(_) => {
                log::info!("PORT environment variable not set, defaulting to 8080.");
                8080
            }
        };

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "production".to_string());

        Self { database_url, port, app_env }
    }
}
