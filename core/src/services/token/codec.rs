//! Token codec: signing and verification of access and refresh tokens.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::token::{
    AccessClaims, RefreshClaims, RefreshTokenRecord, JWT_AUDIENCE, JWT_ISSUER,
};
use crate::domain::entities::user::User;
use crate::errors::TokenError;

use super::config::TokenConfig;

/// Stateless codec turning domain data into signed, time-bounded token
/// strings and back.
///
/// Two independent secrets are held, one per token kind, so an access
/// token can never pass verification as a refresh token or vice versa.
/// Expiry is always derived from the configured TTL at signing time;
/// callers pass domain fields only.
pub struct TokenCodec {
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
    config: TokenConfig,
}

impl TokenCodec {
    /// Creates a new codec from a validated configuration.
    pub fn new(config: TokenConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Expired means expired: no grace window on either token kind.
        validation.leeway = 0;

        Self {
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
            config,
        }
    }

    /// Access token lifetime, as configured
    pub fn access_token_ttl(&self) -> chrono::Duration {
        self.config.access_token_ttl
    }

    /// Refresh token lifetime, as configured
    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        self.config.refresh_token_ttl
    }

    /// Signs an access token for `user`, anchored to the refresh session
    /// identified by `rti`.
    ///
    /// The role claim is taken from the entity passed in; callers are
    /// expected to pass a freshly loaded user so the claim reflects the
    /// current role, not a session snapshot.
    pub fn sign_access(&self, user: &User, rti: Uuid) -> Result<String, TokenError> {
        let claims = AccessClaims::new(
            user.id,
            &user.username,
            user.role,
            rti,
            self.config.access_token_ttl,
        );
        self.encode_jwt(&claims, &self.access_encoding_key)
    }

    /// Signs a refresh token mirroring a stored session record.
    pub fn sign_refresh(&self, record: &RefreshTokenRecord) -> Result<String, TokenError> {
        let claims = RefreshClaims::from_record(record);
        self.encode_jwt(&claims, &self.refresh_encoding_key)
    }

    /// Verifies an access token and returns its claims.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.decode_jwt(token, &self.access_decoding_key)
    }

    /// Verifies a refresh token and returns its claims.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        self.decode_jwt(token, &self.refresh_decoding_key)
    }

    /// Decodes a refresh token without checking its signature or expiry.
    ///
    /// Only fit for surfacing the embedded record id to a server-side
    /// lookup. The result proves nothing about authenticity: callers must
    /// pair it with a `verify_refresh` call before or after, and must
    /// never base an authorization decision on it alone.
    pub fn decode_refresh_unverified(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;

        decode::<RefreshClaims>(token, &self.refresh_decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidTokenFormat)
    }

    fn encode_jwt<T: Serialize>(
        &self,
        claims: &T,
        key: &EncodingKey,
    ) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, key).map_err(|_| TokenError::TokenGenerationFailed)
    }

    fn decode_jwt<T: DeserializeOwned>(
        &self,
        token: &str,
        key: &DecodingKey,
    ) -> Result<T, TokenError> {
        decode::<T>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                jsonwebtoken::errors::ErrorKind::InvalidIssuer
                | jsonwebtoken::errors::ErrorKind::InvalidAudience => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            })
    }
}
