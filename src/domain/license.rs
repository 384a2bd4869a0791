use chrono::NaiveDate;

use crate::domain::audit::{AuditInfo, UpdateStamp};

/// A banking license published by the public-info service.
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    pub id: i64,
    pub number: String,
    pub issued_on: Option<NaiveDate>,
    pub audit: AuditInfo,
}

/// Field values for a new license row.
#[derive(Debug, Clone)]
pub struct NewLicense {
    pub number: String,
    pub issued_on: Option<NaiveDate>,
    pub audit: AuditInfo,
}

/// Replacement field values for an existing license row.
#[derive(Debug, Clone)]
pub struct LicenseUpdate {
    pub number: String,
    pub issued_on: Option<NaiveDate>,
    pub stamp: UpdateStamp,
}
