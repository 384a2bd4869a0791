use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::{Json, Path, Query};
use crate::api::handlers::{author_from, PageParams, PageResponse};
use crate::domain::atm::{Atm, AtmUpdate, NewAtm};
use crate::domain::audit::{AuditInfo, UpdateStamp};
use crate::domain::repositories::AtmRepository;
use crate::infrastructure::repositories::PostgresAtmRepository;

/// Request body for creating or replacing an ATM
#[derive(Debug, Deserialize, Validate)]
pub struct AtmRequest {
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    #[serde(default)]
    pub all_hours: bool,
}

/// ATM representation returned to clients
#[derive(Debug, Serialize)]
pub struct AtmResponse {
    pub id: i64,
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<&Atm> for AtmResponse {
    fn from(atm: &Atm) -> Self {
        Self {
            id: atm.id,
            address: atm.address.clone(),
            start_of_work: atm.start_of_work,
            end_of_work: atm.end_of_work,
            all_hours: atm.all_hours,
            created_at: atm.audit.created_at,
            updated_at: atm.audit.updated_at,
            created_by: atm.audit.created_by.clone(),
            updated_by: atm.audit.updated_by.clone(),
        }
    }
}

/// Create a new ATM
///
/// POST /api/atms
pub async fn create_atm(
    State(pool): State<PgPool>,
    headers: HeaderMap,
    Json(req): Json<AtmRequest>,
) -> Result<(StatusCode, Json<AtmResponse>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let audit = AuditInfo::on_create(author_from(&headers));
    let repo = PostgresAtmRepository::new(pool);
    let atm = repo
        .create(NewAtm {
            address: req.address,
            start_of_work: req.start_of_work,
            end_of_work: req.end_of_work,
            all_hours: req.all_hours,
            audit,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AtmResponse::from(&atm))))
}

/// Get an ATM by ID
///
/// GET /api/atms/:id
pub async fn get_atm(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<AtmResponse>, ApiError> {
    let repo = PostgresAtmRepository::new(pool);
    let atm = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("ATM not found: {id}")))?;

    Ok(Json(AtmResponse::from(&atm)))
}

/// List ATMs, paginated
///
/// GET /api/atms
pub async fn list_atms(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
) -> Result<Json<PageResponse<AtmResponse>>, ApiError> {
    let repo = PostgresAtmRepository::new(pool);
    let atms = repo.list(params.to_page()).await?;
    let total = repo.count().await?;

    let items = atms.iter().map(AtmResponse::from).collect();
    Ok(Json(PageResponse::new(items, &params, total)))
}

/// Replace an ATM
///
/// PUT /api/atms/:id
pub async fn update_atm(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<AtmRequest>,
) -> Result<Json<AtmResponse>, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let repo = PostgresAtmRepository::new(pool);
    let atm = repo
        .update(
            id,
            AtmUpdate {
                address: req.address,
                start_of_work: req.start_of_work,
                end_of_work: req.end_of_work,
                all_hours: req.all_hours,
                stamp: UpdateStamp::new(author_from(&headers)),
            },
        )
        .await?
        .ok_or_else(|| ApiError::not_found(format!("ATM not found: {id}")))?;

    Ok(Json(AtmResponse::from(&atm)))
}

/// Delete an ATM
///
/// DELETE /api/atms/:id
pub async fn delete_atm(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = PostgresAtmRepository::new(pool);
    if !repo.delete(id).await? {
        return Err(ApiError::not_found(format!("ATM not found: {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}
