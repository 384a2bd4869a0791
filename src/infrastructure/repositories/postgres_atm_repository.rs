use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::PgPool;

use crate::domain::atm::{Atm, AtmUpdate, NewAtm};
use crate::domain::audit::AuditInfo;
use crate::domain::repositories::{AtmRepository, Page, RepositoryError};

/// PostgreSQL implementation of AtmRepository.
///
/// Uses parameterized runtime queries so the crate builds without a live
/// database connection.
pub struct PostgresAtmRepository {
    pool: PgPool,
}

impl PostgresAtmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AtmRow {
    id: i64,
    address: String,
    start_of_work: Option<NaiveTime>,
    end_of_work: Option<NaiveTime>,
    all_hours: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: Option<String>,
    updated_by: Option<String>,
}

impl From<AtmRow> for Atm {
    fn from(row: AtmRow) -> Self {
        Atm {
            id: row.id,
            address: row.address,
            start_of_work: row.start_of_work,
            end_of_work: row.end_of_work,
            all_hours: row.all_hours,
            audit: AuditInfo {
                created_at: row.created_at,
                updated_at: row.updated_at,
                created_by: row.created_by,
                updated_by: row.updated_by,
            },
        }
    }
}

const ATM_COLUMNS: &str =
    "id, address, start_of_work, end_of_work, all_hours, created_at, updated_at, created_by, updated_by";

#[async_trait]
impl AtmRepository for PostgresAtmRepository {
    async fn create(&self, atm: NewAtm) -> Result<Atm, RepositoryError> {
        let row = sqlx::query_as::<_, AtmRow>(&format!(
            "INSERT INTO atms (address, start_of_work, end_of_work, all_hours, \
                               created_at, updated_at, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {ATM_COLUMNS}"
        ))
        .bind(&atm.address)
        .bind(atm.start_of_work)
        .bind(atm.end_of_work)
        .bind(atm.all_hours)
        .bind(atm.audit.created_at)
        .bind(atm.audit.updated_at)
        .bind(&atm.audit.created_by)
        .bind(&atm.audit.updated_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Atm>, RepositoryError> {
        let row = sqlx::query_as::<_, AtmRow>(&format!(
            "SELECT {ATM_COLUMNS} FROM atms WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Atm::from))
    }

    async fn list(&self, page: Page) -> Result<Vec<Atm>, RepositoryError> {
        let rows = sqlx::query_as::<_, AtmRow>(&format!(
            "SELECT {ATM_COLUMNS} FROM atms ORDER BY id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Atm::from).collect())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM atms")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: AtmUpdate) -> Result<Option<Atm>, RepositoryError> {
        let row = sqlx::query_as::<_, AtmRow>(&format!(
            "UPDATE atms SET address = $2, start_of_work = $3, end_of_work = $4, \
                             all_hours = $5, updated_at = $6, updated_by = $7 \
             WHERE id = $1 \
             RETURNING {ATM_COLUMNS}"
        ))
        .bind(id)
        .bind(&update.address)
        .bind(update.start_of_work)
        .bind(update.end_of_work)
        .bind(update.all_hours)
        .bind(update.stamp.updated_at)
        .bind(&update.stamp.updated_by)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Atm::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM atms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
