//! Common test utilities for CLI integration tests.
//!
//! Each test gets an isolated data directory and working directory so
//! that neither the user's `~/.merlin` nor a `merlin.yaml` above the
//! checkout is picked up.

use assert_cmd::Command;
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

use merlin::database::{Database, DatabaseConfig};
use merlin::{Booking, Facility, Invoice, LockCombination};

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the merlin data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created; `merlin init` creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("merlin-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Path of the database inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("merlin.db")
    }

    /// Get a bare command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("merlin").expect("Failed to find merlin binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("MERLIN_DATA_DIR")
            .env_remove("MERLIN_DATABASE_PATH")
            .env_remove("MERLIN_BUSY_TIMEOUT_MS")
            .env_remove("MERLIN_SAME_DAY_POLICY")
            .env_remove("MERLIN_LOG_MODE");
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Creates the database directly through the library.
    pub fn seed(&self) -> Seeder {
        let db = Database::open(DatabaseConfig::new(self.database_path()))
            .expect("Failed to create database");
        Seeder { db }
    }
}

/// Writes reservation data into a test database.
pub struct Seeder {
    db: Database,
}

#[allow(dead_code)]
impl Seeder {
    /// Adds a facility.
    pub fn facility(&self, code: &str, name: &str) -> &Self {
        Database::insert_facility(self.db.connection(), &Facility::new(code, name).unwrap())
            .unwrap();
        self
    }

    /// Adds an invoice.
    pub fn invoice(&self, id: i64, email: &str) -> &Self {
        Database::insert_invoice(self.db.connection(), &Invoice::new(id, id + 100, email))
            .unwrap();
        self
    }

    /// Books `users` occupants at `code` for each night.
    pub fn nights(&self, invoice_id: i64, code: &str, dates: &[&str], users: u32) -> &Self {
        for day in dates {
            Database::insert_stay(
                self.db.connection(),
                invoice_id,
                code,
                &Booking::new(date(day), users).unwrap(),
            )
            .unwrap();
        }
        self
    }

    /// Adds a lock combination valid between two dates inclusive.
    pub fn combination(&self, code: &str, value: &str, from: &str, until: &str) -> &Self {
        Database::insert_lock_combination(
            self.db.connection(),
            code,
            &LockCombination::new(value, date(from), date(until)),
        )
        .unwrap();
        self
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}
