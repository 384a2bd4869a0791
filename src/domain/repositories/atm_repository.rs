use async_trait::async_trait;

use crate::domain::atm::{Atm, AtmUpdate, NewAtm};
use crate::domain::repositories::{Page, RepositoryError};

/// Repository trait for ATM records.
///
/// Defines the contract for persisting and retrieving ATMs, keyed by a
/// 64-bit surrogate identifier. Implementations handle database-specific
/// details; nothing beyond identifier-keyed CRUD belongs here.
#[async_trait]
pub trait AtmRepository: Send + Sync {
    /// Insert a new ATM, returning the stored record with its assigned id.
    async fn create(&self, atm: NewAtm) -> Result<Atm, RepositoryError>;

    /// Find an ATM by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Atm>, RepositoryError>;

    /// List ATMs for one page, newest first.
    async fn list(&self, page: Page) -> Result<Vec<Atm>, RepositoryError>;

    /// Total number of ATM rows.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Replace an ATM's fields, returning the updated record or `None`
    /// when no row has the given id.
    async fn update(&self, id: i64, update: AtmUpdate) -> Result<Option<Atm>, RepositoryError>;

    /// Delete an ATM by id, reporting whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
