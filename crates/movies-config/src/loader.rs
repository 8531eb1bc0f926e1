//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use movies_core::MoviesError;
use std::path::Path;
use tracing::{debug, info, warn};

/// Loads layered configuration from a directory and the environment.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a loader reading TOML files from `config_dir`.
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and validates the configuration.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `default.toml`
    /// 2. `{environment}.toml`, where the environment comes from `MOVIES_ENVIRONMENT`
    /// 3. `local.toml`
    /// 4. Environment variables with the `MOVIES__` prefix
    pub fn load(&self) -> Result<AppConfig, MoviesError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("MOVIES_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", self.config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("MOVIES")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_movies_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_movies_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Validates a loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), MoviesError> {
    if config.app.environment == "production" && config.security.jwt_secret == "change-me-in-production" {
        warn!("Using default JWT secret in production! This is a security risk.");
    }

    if config.database.url.is_empty() {
        return Err(MoviesError::Configuration("Database URL is required".to_string()));
    }

    if config.redis.enabled && config.redis.url.is_empty() {
        return Err(MoviesError::Configuration(
            "Redis URL is required when Redis is enabled".to_string(),
        ));
    }

    Ok(())
}

fn config_error_to_movies_error(err: ConfigError) -> MoviesError {
    MoviesError::Configuration(err.to_string())
}
