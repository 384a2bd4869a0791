use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::{Json, Path, Query};
use crate::api::handlers::{author_from, PageParams, PageResponse};
use crate::domain::audit::{AuditInfo, UpdateStamp};
use crate::domain::license::{License, LicenseUpdate, NewLicense};
use crate::domain::repositories::LicenseRepository;
use crate::infrastructure::repositories::PostgresLicenseRepository;

/// Request body for creating or replacing a license
#[derive(Debug, Deserialize, Validate)]
pub struct LicenseRequest {
    #[validate(length(min = 1, max = 64))]
    pub number: String,
    pub issued_on: Option<NaiveDate>,
}

/// License representation returned to clients
#[derive(Debug, Serialize)]
pub struct LicenseResponse {
    pub id: i64,
    pub number: String,
    pub issued_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<&License> for LicenseResponse {
    fn from(license: &License) -> Self {
        Self {
            id: license.id,
            number: license.number.clone(),
            issued_on: license.issued_on,
            created_at: license.audit.created_at,
            updated_at: license.audit.updated_at,
            created_by: license.audit.created_by.clone(),
            updated_by: license.audit.updated_by.clone(),
        }
    }
}

/// Create a new license
///
/// POST /api/licenses
pub async fn create_license(
    State(pool): State<PgPool>,
    headers: HeaderMap,
    Json(req): Json<LicenseRequest>,
) -> Result<(StatusCode, Json<LicenseResponse>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let audit = AuditInfo::on_create(author_from(&headers));
    let repo = PostgresLicenseRepository::new(pool);
    let license = repo
        .create(NewLicense {
            number: req.number,
            issued_on: req.issued_on,
            audit,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(LicenseResponse::from(&license))))
}

/// Get a license by ID
///
/// GET /api/licenses/:id
pub async fn get_license(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<LicenseResponse>, ApiError> {
    let repo = PostgresLicenseRepository::new(pool);
    let license = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("License not found: {id}")))?;

    Ok(Json(LicenseResponse::from(&license)))
}

/// List licenses, paginated
///
/// GET /api/licenses
pub async fn list_licenses(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<LicenseResponse>>, ApiError> {
    let repo = PostgresLicenseRepository::new(pool);
    let licenses = repo.list(params.to_page()).await?;
    let total = repo.count().await?;

    let items = licenses.iter().map(LicenseResponse::from).collect();
    Ok(Json(PageResponse::new(items, &params, total)))
}

/// Replace a license
///
/// PUT /api/licenses/:id
pub async fn update_license(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<LicenseRequest>,
) -> Result<Json<LicenseResponse>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let repo = PostgresLicenseRepository::new(pool);
    let license = repo
        .update(
            id,
            LicenseUpdate {
                number: req.number,
                issued_on: req.issued_on,
                stamp: UpdateStamp::new(author_from(&headers)),
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found(format!("License not found: {id}")))?;

    Ok(Json(LicenseResponse::from(&license)))
}

/// Delete a license
///
/// DELETE /api/licenses/:id
pub async fn delete_license(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PostgresLicenseRepository::new(pool);
    if !repo.delete(id).await? {
        return Err(ApiError::not_found(format!("License not found: {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}
