//! Domain-specific error types and error handling.
//!
//! Domain failures deliberately collapse into a small taxonomy with one
//! stable public message per category, so callers cannot learn which
//! sub-check rejected a credential. The specific reason is logged, never
//! returned.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login-time lookup miss. Distinguished from `InvalidCredentials`
    /// only because login is not yet an authenticated context.
    #[error("user not found")]
    UserNotFound,

    /// Uniform rejection for every other domain failure: wrong password,
    /// malformed or expired tokens, ownership mismatch, role drift.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with a username that is already taken
    #[error("user already exists")]
    UserAlreadyExists,
}

/// Token codec errors
///
/// These never leave the core as-is: the lifecycle service maps them to
/// [`AuthError::InvalidCredentials`] and the guard maps them to a plain
/// 401 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token not yet valid")]
    TokenNotYetValid,

    #[error("invalid claims")]
    InvalidClaims,

    #[error("token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Shorthand for an internal (storage or I/O) failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
