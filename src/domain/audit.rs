use chrono::{DateTime, Utc};
use serde::Serialize;

/// Audit metadata embedded by value in every persisted record.
///
/// Stamping is explicit: the create path builds the whole block with
/// [`AuditInfo::on_create`], the update path applies an [`UpdateStamp`].
/// There are no lifecycle hooks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditInfo {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl AuditInfo {
    /// Stamps a freshly created record. Both timestamps start equal and
    /// both author fields carry the creating author.
    pub fn on_create(author: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            created_by: author.map(str::to_owned),
            updated_by: author.map(str::to_owned),
        }
    }
}

/// The updated-at/updated-by pair applied when a record is modified.
#[derive(Debug, Clone)]
pub struct UpdateStamp {
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

impl UpdateStamp {
    pub fn new(author: Option<&str>) -> Self {
        Self {
            updated_at: Utc::now(),
            updated_by: author.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_create_stamps_both_timestamps_equal() {
        let audit = AuditInfo::on_create(Some("teller-17"));
        assert_eq!(audit.created_at, audit.updated_at);
        assert_eq!(audit.created_by.as_deref(), Some("teller-17"));
        assert_eq!(audit.updated_by.as_deref(), Some("teller-17"));
    }

    #[test]
    fn on_create_without_author_leaves_authors_empty() {
        let audit = AuditInfo::on_create(None);
        assert!(audit.created_by.is_none());
        assert!(audit.updated_by.is_none());
    }

    #[test]
    fn update_stamp_carries_author() {
        let stamp = UpdateStamp::new(Some("auditor"));
        assert_eq!(stamp.updated_by.as_deref(), Some("auditor"));
    }
}
