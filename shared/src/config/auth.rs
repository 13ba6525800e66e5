//! Authentication configuration
//!
//! Two independent secrets are used, one per token kind, each with its
//! own TTL. All four values are mandatory: absence of any of them is a
//! fatal startup condition, not a per-request failure.

use std::env;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Token signing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    pub access_token_secret: String,

    /// Access token lifetime in seconds (short; minutes in practice)
    pub access_token_ttl_seconds: i64,

    /// Secret used to sign and verify refresh tokens
    pub refresh_token_secret: String,

    /// Refresh token lifetime in seconds (days in practice)
    pub refresh_token_ttl_seconds: i64,
}

impl AuthConfig {
    /// Load the token configuration from the environment.
    ///
    /// Required variables:
    /// - `JWT_ACCESS_SECRET`
    /// - `JWT_ACCESS_TTL_SECONDS`
    /// - `JWT_REFRESH_SECRET`
    /// - `JWT_REFRESH_TTL_SECONDS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            access_token_secret: require("JWT_ACCESS_SECRET")?,
            access_token_ttl_seconds: require_seconds("JWT_ACCESS_TTL_SECONDS")?,
            refresh_token_secret: require("JWT_REFRESH_SECRET")?,
            refresh_token_ttl_seconds: require_seconds("JWT_REFRESH_TTL_SECONDS")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::MissingVar { name })?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVar { name });
    }
    Ok(value)
}

fn require_seconds(name: &'static str) -> Result<i64, ConfigError> {
    let raw = require(name)?;
    let seconds: i64 = raw.parse().map_err(|_| ConfigError::InvalidVar {
        name,
        expected: "positive integer number of seconds",
        value: raw.clone(),
    })?;
    if seconds <= 0 {
        return Err(ConfigError::InvalidVar {
            name,
            expected: "positive integer number of seconds",
            value: raw,
        });
    }
    Ok(seconds)
}
