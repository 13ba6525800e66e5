//! Password hashing helpers built on bcrypt.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Hashes a plaintext password for storage.
///
/// Uses the bcrypt default cost. Call this before handing a user entity
/// to the repository; repositories never see plaintext passwords.
pub fn hash_password(password: &str) -> DomainResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash is
/// malformed.
pub fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    verify(password, password_hash)
        .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
}
