//! Integration tests for the repository layer
//!
//! These tests verify that the PostgreSQL repository implementations
//! correctly round-trip records, including the audit columns. They need a
//! real database with the migrations applied, so they are `#[ignore]`d by
//! default; run them with `DATABASE_URL` set and `cargo test -- --ignored`.

use bank_publicinfo_api::domain::atm::{AtmUpdate, NewAtm};
use bank_publicinfo_api::domain::audit::{AuditInfo, UpdateStamp};
use bank_publicinfo_api::domain::license::{LicenseUpdate, NewLicense};
use bank_publicinfo_api::domain::repositories::{AtmRepository, LicenseRepository, Page};
use bank_publicinfo_api::infrastructure::repositories::{
    PostgresAtmRepository, PostgresLicenseRepository,
};
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

fn test_atm(address: &str) -> NewAtm {
    NewAtm {
        address: address.to_string(),
        start_of_work: NaiveTime::from_hms_opt(9, 0, 0),
        end_of_work: NaiveTime::from_hms_opt(18, 0, 0),
        all_hours: false,
        audit: AuditInfo::on_create(Some("integration-test")),
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn atm_create_then_find_by_id_round_trips() {
    let pool = setup_test_db().await;
    let repo = PostgresAtmRepository::new(pool);

    let created = repo
        .create(test_atm("1 Main Street"))
        .await
        .expect("Failed to create ATM");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find ATM")
        .expect("ATM should exist");

    assert_eq!(found, created);
    assert_eq!(found.audit.created_by.as_deref(), Some("integration-test"));

    // Cleanup
    assert!(repo.delete(created.id).await.expect("Failed to delete ATM"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn atm_update_replaces_fields_and_restamps() {
    let pool = setup_test_db().await;
    let repo = PostgresAtmRepository::new(pool);

    let created = repo
        .create(test_atm("2 Side Street"))
        .await
        .expect("Failed to create ATM");

    let updated = repo
        .update(
            created.id,
            AtmUpdate {
                address: "2a Side Street".to_string(),
                start_of_work: None,
                end_of_work: None,
                all_hours: true,
                stamp: UpdateStamp::new(Some("branch-manager")),
            },
        )
        .await
        .expect("Failed to update ATM")
        .expect("ATM should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.address, "2a Side Street");
    assert!(updated.all_hours);
    assert_eq!(updated.audit.created_by, created.audit.created_by);
    assert_eq!(updated.audit.updated_by.as_deref(), Some("branch-manager"));
    assert!(updated.audit.updated_at > created.audit.updated_at);

    assert!(repo.delete(created.id).await.expect("Failed to delete ATM"));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn atm_update_of_missing_row_returns_none() {
    let pool = setup_test_db().await;
    let repo = PostgresAtmRepository::new(pool);

    let result = repo
        .update(
            i64::MAX,
            AtmUpdate {
                address: "nowhere".to_string(),
                start_of_work: None,
                end_of_work: None,
                all_hours: false,
                stamp: UpdateStamp::new(None),
            },
        )
        .await
        .expect("Update should not fail");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn atm_list_respects_page_window() {
    let pool = setup_test_db().await;
    let repo = PostgresAtmRepository::new(pool);

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = repo
            .create(test_atm(&format!("{i} Page Street")))
            .await
            .expect("Failed to create ATM");
        ids.push(created.id);
    }

    let page = repo
        .list(Page {
            limit: 2,
            offset: 0,
        })
        .await
        .expect("Failed to list ATMs");
    assert_eq!(page.len(), 2);
    // Newest first
    assert!(page[0].id > page[1].id);

    let total = repo.count().await.expect("Failed to count ATMs");
    assert!(total >= 3);

    for id in ids {
        repo.delete(id).await.expect("Failed to delete ATM");
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn license_crud_round_trips() {
    let pool = setup_test_db().await;
    let repo = PostgresLicenseRepository::new(pool);

    let created = repo
        .create(NewLicense {
            number: "LIC-2023-0042".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2023, 2, 15),
            audit: AuditInfo::on_create(None),
        })
        .await
        .expect("Failed to create license");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find license")
        .expect("License should exist");
    assert_eq!(found, created);
    assert!(found.audit.created_by.is_none());

    let updated = repo
        .update(
            created.id,
            LicenseUpdate {
                number: "LIC-2023-0042-R1".to_string(),
                issued_on: created.issued_on,
                stamp: UpdateStamp::new(Some("registrar")),
            },
        )
        .await
        .expect("Failed to update license")
        .expect("License should exist");
    assert_eq!(updated.number, "LIC-2023-0042-R1");

    assert!(repo
        .delete(created.id)
        .await
        .expect("Failed to delete license"));

    let gone = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to query license");
    assert!(gone.is_none());

    // Deleting again reports no row removed.
    assert!(!repo
        .delete(created.id)
        .await
        .expect("Failed to delete license"));
}
