//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRole;

/// JWT issuer
pub const JWT_ISSUER: &str = "keystone";

/// JWT audience
pub const JWT_AUDIENCE: &str = "keystone-api";

/// Claims embedded in a signed access token.
///
/// Access tokens are self-contained: the guard verifies them without a
/// store lookup. The `rti` claim anchors the token to the refresh session
/// it was minted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Login name of the user
    pub username: String,

    /// Role the user held when this token was signed
    pub role: UserRole,

    /// ID of the refresh-token record this token was minted from
    pub rti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl AccessClaims {
    /// Creates new claims for an access token.
    ///
    /// The expiry is derived from `ttl` at signing time; callers pass
    /// domain fields only and never an expiry of their own.
    pub fn new(user_id: Uuid, username: &str, role: UserRole, rti: Uuid, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            rti: rti.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Gets the refresh-token record ID from the claims
    pub fn record_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.rti)
    }
}

/// Claims embedded in a signed refresh token.
///
/// `jti` equals the ID of the server-side [`RefreshTokenRecord`]; the
/// token is only as trustworthy as that record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Role snapshot at issuance
    pub role: UserRole,

    /// ID of the backing refresh-token record
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, equal to the record's `expires_at`
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl RefreshClaims {
    /// Creates refresh claims mirroring a stored record.
    ///
    /// The embedded expiry and the record's `expires_at` are two views of
    /// one clock, kept consistent here so both checks agree at the edges.
    pub fn from_record(record: &RefreshTokenRecord) -> Self {
        let now = Utc::now();

        Self {
            sub: record.user_id.to_string(),
            role: record.role,
            jti: record.id.to_string(),
            iat: now.timestamp(),
            exp: record.expires_at.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Gets the refresh-token record ID from the claims
    pub fn record_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.jti)
    }
}

/// Refresh token record persisted by the store.
///
/// A refresh session has no explicit status field. It is *active* while
/// the record exists and is unexpired, *expired* once `expires_at` has
/// passed (transitioning to revoked on the next touch), and *revoked*
/// once the record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Unique identifier, generated at creation and embedded in the
    /// refresh token as its `jti` claim
    pub id: Uuid,

    /// User this session belongs to
    pub user_id: Uuid,

    /// Role the user held when the session was opened
    pub role: UserRole,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a new refresh-token record expiring `ttl` from now.
    pub fn new(user_id: Uuid, role: UserRole, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            role,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Token pair returned to the client on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with expiry times taken from the TTLs
    /// the tokens were signed with.
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_ttl.num_seconds(),
            refresh_expires_in: refresh_ttl.num_seconds(),
        }
    }
}
