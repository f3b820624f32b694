//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Booking, Facility, Invoice};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Panics
///
/// Panics if the string is not a date.
#[must_use]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Seeds an invoice with one night at `facility_code` per date, two
/// occupants each. The facility is named `Hut {code}` and the guest
/// `guest{invoice_id}@example.com`.
///
/// # Panics
///
/// Panics if any insert fails.
pub fn seed_stay(conn: &Connection, invoice_id: i64, facility_code: &str, dates: &[&str]) {
    Database::insert_facility(
        conn,
        &Facility::new(facility_code, format!("Hut {facility_code}")).unwrap(),
    )
    .unwrap();
    Database::insert_invoice(
        conn,
        &Invoice::new(
            invoice_id,
            invoice_id * 10,
            format!("guest{invoice_id}@example.com"),
        ),
    )
    .unwrap();

    for day in dates {
        Database::insert_stay(
            conn,
            invoice_id,
            facility_code,
            &Booking::new(date(day), 2).unwrap(),
        )
        .unwrap();
    }
}
