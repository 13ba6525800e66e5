//! Infrastructure layer for the Keystone authentication core.
//!
//! Provides the MySQL-backed implementations of the `ks_core` repository
//! traits plus connection pool management. Nothing here contains domain
//! logic; expiry checks and credential decisions live in `ks_core`.

pub mod database;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlTokenRepository, MySqlUserRepository};
