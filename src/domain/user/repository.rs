use async_trait::async_trait;

use super::User;
use crate::domain::{DomainError, DomainResult};

/// Whole-collection persistence for user records.
///
/// Every call works on the complete collection: there is no per-record
/// access and no locking, so concurrent writers race with last-write-wins.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Unparseable contents degrade to an empty collection; only I/O
    /// failures are returned as errors.
    async fn read_all(&self) -> DomainResult<Vec<User>>;

    /// Replace the persisted collection with `users`.
    async fn write_all(&self, users: &[User]) -> DomainResult<()>;

    /// Identifier for the next record: `max(id) + 1`, or 1 when empty.
    ///
    /// Fails when the largest stored id is already `u64::MAX`.
    fn next_id(&self, users: &[User]) -> DomainResult<u64> {
        match users.iter().map(|u| u.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| DomainError::Persistence(format!("id space exhausted at {max}"))),
        }
    }
}
