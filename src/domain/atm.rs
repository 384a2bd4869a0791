use chrono::NaiveTime;

use crate::domain::audit::{AuditInfo, UpdateStamp};

/// A bank ATM as exposed by the public-info service.
#[derive(Debug, Clone, PartialEq)]
pub struct Atm {
    pub id: i64,
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: bool,
    pub audit: AuditInfo,
}

/// Field values for a new ATM row. The surrogate key is assigned by the
/// database on insert.
#[derive(Debug, Clone)]
pub struct NewAtm {
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: bool,
    pub audit: AuditInfo,
}

/// Replacement field values for an existing ATM row.
#[derive(Debug, Clone)]
pub struct AtmUpdate {
    pub address: String,
    pub start_of_work: Option<NaiveTime>,
    pub end_of_work: Option<NaiveTime>,
    pub all_hours: bool,
    pub stamp: UpdateStamp,
}
