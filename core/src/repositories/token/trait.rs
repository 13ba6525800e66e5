//! Token repository trait defining the interface for refresh-session persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Repository trait for [`RefreshTokenRecord`] persistence operations.
///
/// Each record is only ever touched by operations keyed on its own id, so
/// every method is a single atomic read or write; no multi-step
/// transactions are needed. Storage unavailability surfaces as
/// [`DomainError::Internal`], never as a domain failure.
///
/// # Example
/// ```no_run
/// # use chrono::Duration;
/// # use uuid::Uuid;
/// # use ks_core::repositories::TokenRepository;
/// # use ks_core::domain::entities::token::RefreshTokenRecord;
/// # use ks_core::domain::entities::user::UserRole;
/// # async fn example(repo: &impl TokenRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let record = RefreshTokenRecord::new(Uuid::new_v4(), UserRole::User, Duration::days(7));
/// let saved = repo.create(record).await?;
///
/// match repo.find_by_id(saved.id).await? {
///     Some(found) => println!("session open for user {}", found.user_id),
///     None => println!("session revoked"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh-session record
    ///
    /// # Returns
    /// * `Ok(RefreshTokenRecord)` - The saved record
    /// * `Err(DomainError)` - Storage failure
    async fn create(&self, record: RefreshTokenRecord) -> Result<RefreshTokenRecord, DomainError>;

    /// Find a record by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(RefreshTokenRecord))` - Record found
    /// * `Ok(None)` - No record with the given id
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Delete a record by id.
    ///
    /// Idempotent: deleting a record that no longer exists is not an
    /// error. Concurrent deletes race harmlessly to the same outcome.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), DomainError>;
}
