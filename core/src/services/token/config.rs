//! Configuration for the token codec

use chrono::Duration;
use jsonwebtoken::Algorithm;

use ks_shared::config::AuthConfig;

/// Configuration for the token codec
///
/// Built once at startup from the validated [`AuthConfig`] and injected
/// into the codec; never re-read per request.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,
    /// Secret for signing and verifying refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-access-secret-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-change-in-production".to_string(),
            access_token_ttl: Duration::minutes(15),
            refresh_token_ttl: Duration::days(7),
            algorithm: Algorithm::HS256,
        }
    }
}

impl From<&AuthConfig> for TokenConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            access_secret: config.access_token_secret.clone(),
            refresh_secret: config.refresh_token_secret.clone(),
            access_token_ttl: Duration::seconds(config.access_token_ttl_seconds),
            refresh_token_ttl: Duration::seconds(config.refresh_token_ttl_seconds),
            algorithm: Algorithm::HS256,
        }
    }
}
