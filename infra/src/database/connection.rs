//! Database connection pool management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySqlPool};
use tracing::log::LevelFilter;

use ks_shared::config::DatabaseConfig;

/// Creates the MySQL connection pool from a validated configuration.
///
/// Called once at startup; the returned pool is cheap to clone and is
/// shared by all repositories.
///
/// # Arguments
///
/// * `config` - Database configuration settings
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    tracing::info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    let connect_options = MySqlConnectOptions::from_str(&config.url)?
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_secs(1));

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    tracing::info!("database connection pool created");

    Ok(pool)
}
