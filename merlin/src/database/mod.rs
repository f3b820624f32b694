//! `SQLite` storage for reservation data.
//!
//! This module provides connection management, schema versioning, the
//! four stay queries, and helpers for loading raw data.
//!
//! # Examples
//!
//! ```no_run
//! use merlin::database::{Database, DatabaseConfig};
//! use merlin::{Booking, Facility, Invoice};
//! use chrono::NaiveDate;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/merlin.db")).unwrap();
//! let conn = db.connection();
//!
//! let hut = Facility::new("CH", "Canmore Clubhouse").unwrap();
//! Database::insert_facility(conn, &hut).unwrap();
//! Database::insert_invoice(conn, &Invoice::new(1001, 55, "guest@example.com")).unwrap();
//!
//! let night = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
//! Database::insert_stay(conn, 1001, hut.code(), &Booking::new(night, 4).unwrap()).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod row_source;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE, DATA_DIR_ENV,
};
pub use connection::Database;
pub use row_source::SqliteRowSource;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
