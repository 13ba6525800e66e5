//! Authentication service: login, refresh, logout and registration.

use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::entities::token::{RefreshTokenRecord, TokenPair};
use crate::domain::entities::user::{User, UserRole};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenCodec;

use super::password::{hash_password, verify_password};

/// Authentication service managing the dual-token session lifecycle.
///
/// A session is opened at login by persisting a [`RefreshTokenRecord`]
/// and handing the client a token pair. Refresh tokens are never rotated:
/// the same refresh token mints short-lived access tokens until the
/// session expires or is logged out. Every mint re-reads the user so the
/// access token always carries the current role.
///
/// All credential and session failures surface as
/// [`AuthError::InvalidCredentials`] (except an unknown login name, which
/// is [`AuthError::UserNotFound`]); the distinguishing detail is logged
/// at debug level only.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// User repository for credential checks and live role lookups
    user_repository: Arc<U>,
    /// Refresh-token store holding the server-side session records
    token_repository: Arc<T>,
    /// Codec for signing and verifying both token kinds
    codec: Arc<TokenCodec>,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Creates a new authentication service.
    pub fn new(user_repository: Arc<U>, token_repository: Arc<T>, codec: Arc<TokenCodec>) -> Self {
        Self {
            user_repository,
            token_repository,
            codec,
        }
    }

    /// Authenticates a user and opens a new refresh session.
    ///
    /// This method:
    /// 1. Looks up the user by login name
    /// 2. Verifies the password against the stored bcrypt hash
    /// 3. Persists a refresh-token record with the configured TTL
    /// 4. Signs a refresh token mirroring that record
    /// 5. Mints the first access token through the shared issuance path
    ///
    /// # Arguments
    ///
    /// * `username` - Login name
    /// * `password` - Plaintext password
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access and refresh tokens with their lifetimes
    /// * `Err(DomainError)` - `UserNotFound` for an unknown name,
    ///   `InvalidCredentials` for a wrong password
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let record = RefreshTokenRecord::new(user.id, user.role, self.codec.refresh_token_ttl());
        let record = self.token_repository.create(record).await?;

        let refresh_token = self.codec.sign_refresh(&record)?;
        let access_token = self.issue_access_token(user.id, record.id).await?;

        debug!(user_id = %user.id, record_id = %record.id, "session opened");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.codec.access_token_ttl(),
            self.codec.refresh_token_ttl(),
        ))
    }

    /// Mints a new access token from a refresh token.
    ///
    /// The refresh token itself is returned unchanged by design; only the
    /// access token is new. Verification is layered: the signature and
    /// embedded expiry first, then the server-side record, then the live
    /// user. A role that changed since the session was opened kills the
    /// session rather than minting a stale-role token.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The refresh token issued at login
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A freshly signed access token
    /// * `Err(DomainError)` - `InvalidCredentials` for any token, session
    ///   or user failure
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<String> {
        if refresh_token.is_empty() {
            debug!("empty refresh token");
            return Err(AuthError::InvalidCredentials.into());
        }

        let claims = match self.codec.verify_refresh(refresh_token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => {
                // The signature checked out before the expiry tripped, so
                // the embedded record id is authentic. Drop the matching
                // record now instead of waiting for its next touch.
                self.delete_expired_record(refresh_token).await;
                debug!("refresh token expired");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                debug!(error = %e, "refresh token rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let user_id = claims.user_id().map_err(|_| {
            debug!("refresh token carries a malformed subject");
            DomainError::from(AuthError::InvalidCredentials)
        })?;
        let record_id = claims.record_id().map_err(|_| {
            debug!("refresh token carries a malformed record id");
            DomainError::from(AuthError::InvalidCredentials)
        })?;

        self.issue_access_token(user_id, record_id).await
    }

    /// Revokes a refresh session.
    ///
    /// Deletion is idempotent: logging out a session that is already gone
    /// succeeds, so clients can retry safely. The token itself must still
    /// verify, though: an expired or otherwise invalid token is rejected,
    /// with the record behind an expired one cleaned up in passing.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - The refresh token identifying the session
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        if refresh_token.is_empty() {
            debug!("empty refresh token");
            return Err(AuthError::InvalidCredentials.into());
        }

        let claims = match self.codec.verify_refresh(refresh_token) {
            Ok(claims) => claims,
            Err(TokenError::TokenExpired) => {
                self.delete_expired_record(refresh_token).await;
                debug!("refresh token expired");
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => {
                debug!(error = %e, "refresh token rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let record_id = claims.record_id().map_err(|_| {
            debug!("refresh token carries a malformed record id");
            DomainError::from(AuthError::InvalidCredentials)
        })?;

        self.token_repository.delete_by_id(record_id).await?;
        debug!(record_id = %record_id, "session revoked");

        Ok(())
    }

    /// Registers a new user with a hashed password.
    ///
    /// # Arguments
    ///
    /// * `username` - Desired login name, must be unused
    /// * `password` - Plaintext password, hashed before persistence
    /// * `role` - Initial role
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> DomainResult<User> {
        if self
            .user_repository
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password)?;
        let user = User::new(username.to_string(), password_hash, role);

        self.user_repository.create(user).await
    }

    /// Shared access-token issuance path, used by both login and refresh.
    ///
    /// Checks, in order:
    /// 1. The session record exists
    /// 2. The record belongs to the claimed user
    /// 3. The record is unexpired; an expired one is deleted on this touch
    /// 4. The user still exists
    /// 5. The user's live role matches the session snapshot; drift kills
    ///    the session
    ///
    /// Only then is an access token signed, with the role read from the
    /// live user.
    async fn issue_access_token(&self, user_id: Uuid, record_id: Uuid) -> DomainResult<String> {
        let record = match self.token_repository.find_by_id(record_id).await? {
            Some(record) => record,
            None => {
                debug!(record_id = %record_id, "refresh session not found");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if record.user_id != user_id {
            debug!(record_id = %record_id, "refresh session belongs to another user");
            return Err(AuthError::InvalidCredentials.into());
        }

        if record.is_expired() {
            self.token_repository.delete_by_id(record.id).await?;
            debug!(record_id = %record_id, "refresh session expired");
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = match self.user_repository.find_by_id(user_id).await? {
            Some(user) => user,
            None => {
                debug!(user_id = %user_id, "user no longer exists");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if user.role != record.role {
            self.token_repository.delete_by_id(record.id).await?;
            debug!(user_id = %user_id, "role changed since session start");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.codec.sign_access(&user, record.id)?)
    }

    /// Best-effort cleanup of the record behind an expired refresh token.
    ///
    /// The token failed verification only on expiry, so its payload is
    /// authentic and the embedded record id can be trusted.
    async fn delete_expired_record(&self, refresh_token: &str) {
        let Ok(claims) = self.codec.decode_refresh_unverified(refresh_token) else {
            return;
        };
        let Ok(record_id) = claims.record_id() else {
            return;
        };
        if let Err(e) = self.token_repository.delete_by_id(record_id).await {
            debug!(record_id = %record_id, error = %e, "expired session cleanup failed");
        }
    }
}
