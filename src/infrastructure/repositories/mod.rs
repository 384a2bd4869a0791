// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_atm_repository;
pub mod postgres_license_repository;

pub use postgres_atm_repository::PostgresAtmRepository;
pub use postgres_license_repository::PostgresLicenseRepository;
