//! Shared configuration and common types for the Keystone authentication core
//!
//! This crate provides the functionality every server layer depends on:
//! - Configuration types, loaded once at process start
//! - Startup-fatal configuration errors

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DatabaseConfig};
pub use errors::ConfigError;
