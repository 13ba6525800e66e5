//! Configuration module with business-specific sub-modules
//!
//! Configuration is read from the environment exactly once, at process
//! start. A missing or malformed value aborts startup with a
//! [`ConfigError`](crate::errors::ConfigError); nothing is re-read per
//! request and nothing falls back to a built-in production default.

pub mod auth;
pub mod database;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::DatabaseConfig;

use crate::errors::ConfigError;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Authentication configuration (secrets and TTLs)
    pub auth: AuthConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load the full configuration from the environment.
    ///
    /// Reads a `.env` file first when one exists (local development),
    /// then resolves every required variable. The first missing or
    /// invalid value aborts the load.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            auth: AuthConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
        })
    }
}
