use crate::server::error::{config::ConfigError, AppError};

/// Environment the server runs in. Only `development` exposes internal error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub app_env: AppEnv,
    /// Allowed browser origin for cross-origin API calls; any origin when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            app_env: match std::env::var("APP_ENV").as_deref() {
                Ok("development") => AppEnv::Development,
                _ => AppEnv::Production,
            },
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }

    pub fn is_development(&self) -> bool {
        self.app_env == AppEnv::Development
    }
}
