use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::audit::AuditInfo;
use crate::domain::license::{License, LicenseUpdate, NewLicense};
use crate::domain::repositories::{LicenseRepository, Page, RepositoryError};

/// PostgreSQL implementation of LicenseRepository.
pub struct PostgresLicenseRepository {
    pool: PgPool,
}

impl PostgresLicenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LicenseRow {
    id: i64,
    number: String,
    issued_on: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: Option<String>,
    updated_by: Option<String>,
}

impl From<LicenseRow> for License {
    fn from(row: LicenseRow) -> Self {
        License {
            id: row.id,
            number: row.number,
            issued_on: row.issued_on,
            audit: AuditInfo {
                created_at: row.created_at,
                updated_at: row.updated_at,
                created_by: row.created_by,
                updated_by: row.updated_by,
            },
        }
    }
}

const LICENSE_COLUMNS: &str =
    "id, number, issued_on, created_at, updated_at, created_by, updated_by";

#[async_trait]
impl LicenseRepository for PostgresLicenseRepository {
    async fn create(&self, license: NewLicense) -> Result<License, RepositoryError> {
        let row = sqlx::query_as::<_, LicenseRow>(&format!(
            "INSERT INTO licenses (number, issued_on, created_at, updated_at, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {LICENSE_COLUMNS}"
        ))
        .bind(&license.number)
        .bind(license.issued_on)
        .bind(license.audit.created_at)
        .bind(license.audit.updated_at)
        .bind(&license.audit.created_by)
        .bind(&license.audit.updated_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<License>, RepositoryError> {
        let row = sqlx::query_as::<_, LicenseRow>(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(License::from))
    }

    async fn list(&self, page: Page) -> Result<Vec<License>, RepositoryError> {
        let rows = sqlx::query_as::<_, LicenseRow>(&format!(
            "SELECT {LICENSE_COLUMNS} FROM licenses ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(License::from).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM licenses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn update(
        &self,
        id: i64,
        update: LicenseUpdate,
    ) -> Result<Option<License>, RepositoryError> {
        let row = sqlx::query_as::<_, LicenseRow>(&format!(
            "UPDATE licenses SET number = $2, issued_on = $3, updated_at = $4, updated_by = $5 \
             WHERE id = $1 \
             RETURNING {LICENSE_COLUMNS}"
        ))
        .bind(id)
        .bind(&update.number)
        .bind(update.issued_on)
        .bind(update.stamp.updated_at)
        .bind(&update.stamp.updated_by)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(License::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM licenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
