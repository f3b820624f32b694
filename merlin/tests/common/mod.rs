//! Common test utilities for integration tests.
//!
//! Provides a temporary `SQLite` store with helpers for seeding raw
//! reservation data.

use chrono::NaiveDate;
use tempfile::TempDir;

use merlin::database::{Database, DatabaseConfig, SqliteRowSource};
use merlin::{Booking, Facility, Invoice, LockCombination};

/// Parses a `YYYY-MM-DD` date.
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A seeded database in a temporary directory.
///
/// The directory is removed when the store is dropped.
pub struct TestStore {
    db: Database,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestStore {
    /// Creates an empty store with the schema initialized.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("merlin.db"))).unwrap();
        Self { db, _dir: dir }
    }

    /// Returns the configuration used to open the store.
    pub fn config(&self) -> DatabaseConfig {
        self.db.config().clone()
    }

    /// Returns a row source reading from this store.
    pub fn row_source(&self) -> SqliteRowSource {
        SqliteRowSource::new(self.config())
    }

    /// Adds a facility.
    pub fn facility(&self, code: &str, name: &str) -> &Self {
        Database::insert_facility(self.db.connection(), &Facility::new(code, name).unwrap())
            .unwrap();
        self
    }

    /// Adds an invoice.
    pub fn invoice(&self, id: i64, email: &str) -> &Self {
        Database::insert_invoice(self.db.connection(), &Invoice::new(id, id + 500, email))
            .unwrap();
        self
    }

    /// Books `users` occupants at `facility_code` for each night.
    pub fn nights(&self, invoice_id: i64, facility_code: &str, dates: &[&str], users: u32) -> &Self {
        for day in dates {
            Database::insert_stay(
                self.db.connection(),
                invoice_id,
                facility_code,
                &Booking::new(date(day), users).unwrap(),
            )
            .unwrap();
        }
        self
    }

    /// Adds a lock combination valid between two dates inclusive.
    pub fn combination(&self, facility_code: &str, value: &str, from: &str, until: &str) -> &Self {
        Database::insert_lock_combination(
            self.db.connection(),
            facility_code,
            &LockCombination::new(value, date(from), date(until)),
        )
        .unwrap();
        self
    }

    /// Runs raw SQL against the store.
    pub fn execute(&self, sql: &str) {
        self.db.connection().execute_batch(sql).unwrap();
    }
}
