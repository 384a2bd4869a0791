use async_trait::async_trait;

use crate::domain::license::{License, LicenseUpdate, NewLicense};
use crate::domain::repositories::{Page, RepositoryError};

/// Repository trait for license records, keyed by a 64-bit surrogate
/// identifier.
#[async_trait]
pub trait LicenseRepository: Send + Sync {
    /// Insert a new license, returning the stored record with its assigned id.
    async fn create(&self, license: NewLicense) -> Result<License, RepositoryError>;

    /// Find a license by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<License>, RepositoryError>;

    /// List licenses for one page, newest first.
    async fn list(&self, page: Page) -> Result<Vec<License>, RepositoryError>;

    /// Total number of license rows.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Replace a license's fields, returning the updated record or `None`
    /// when no row has the given id.
    async fn update(
        &self,
        id: i64,
        update: LicenseUpdate,
    ) -> Result<Option<License>, RepositoryError>;

    /// Delete a license by id, reporting whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
