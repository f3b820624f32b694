//! The `SQLite` implementation of [`RowSource`].

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::row::Row;
use crate::source::{Query, RowSource};

use super::config::DatabaseConfig;
use super::connection::Database;

/// A [`RowSource`] backed by a `SQLite` file.
///
/// Each query opens its own connection and drops it before returning,
/// whether the query succeeded or not.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use merlin::database::{DatabaseConfig, SqliteRowSource};
/// use merlin::RowSource;
///
/// let source = SqliteRowSource::new(DatabaseConfig::new("/tmp/merlin.db"));
/// let date = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
/// let rows = source.invoices_with_stays_beginning(date).unwrap();
/// println!("{} invoices", rows.len());
/// ```
#[derive(Debug, Clone)]
pub struct SqliteRowSource {
    config: DatabaseConfig,
}

impl SqliteRowSource {
    /// Creates a row source for the configured database.
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Returns the database configuration.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn run(&self, query: &Query) -> Result<Vec<Row>> {
        let db = Database::open(self.config.clone())
            .map_err(|e| Error::data_access(query.to_string(), e))?;
        Database::query_rows(db.connection(), query)
    }
}

impl RowSource for SqliteRowSource {
    fn invoices_with_stays_beginning(&self, date: NaiveDate) -> Result<Vec<Row>> {
        self.run(&Query::InvoicesWithStaysBeginning(date))
    }

    fn invoices_with_stays_ending(&self, date: NaiveDate) -> Result<Vec<Row>> {
        self.run(&Query::InvoicesWithStaysEnding(date))
    }

    fn itinerary_for_invoice(&self, invoice_id: i64) -> Result<Vec<Row>> {
        self.run(&Query::ItineraryForInvoice(invoice_id))
    }

    fn lock_combinations_for_stay(&self, facility_code: &str, date: NaiveDate) -> Result<Vec<Row>> {
        self.run(&Query::LockCombinationsForStay {
            facility_code: facility_code.to_string(),
            date,
        })
    }
}
