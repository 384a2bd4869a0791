pub mod atm_repository;
pub mod license_repository;

pub use atm_repository::AtmRepository;
pub use license_repository::LicenseRepository;

use thiserror::Error;

/// Errors surfaced by persistence accessors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A limit/offset window over a listing, newest rows first.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}
