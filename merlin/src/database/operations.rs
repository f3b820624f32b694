//! Stay queries and raw-data load helpers.
//!
//! Queries return generic [`Row`]s keyed by column name so that the row
//! mapper sees the same shape whatever store produced them.

use chrono::NaiveDate;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Params};

use crate::error::{Error, Result};
use crate::row::{Row, Value, DATE_FORMAT};
use crate::source::Query;
use crate::{Booking, Facility, Invoice, LockCombination};

use super::connection::Database;
use super::schema::{
    INSERT_FACILITY, INSERT_INVOICE, INSERT_LOCK_COMBINATION, INSERT_STAY,
    SELECT_INVOICES_WITH_STAYS_BEGINNING, SELECT_INVOICES_WITH_STAYS_ENDING,
    SELECT_ITINERARY_FOR_INVOICE, SELECT_LOCK_COMBINATIONS_FOR_STAY,
};

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(f) => Value::Real(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Value::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Runs `sql` and reads every result row into a [`Row`].
fn fetch_rows<P: Params>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<Vec<Row>> {
    let mut stmt = conn.prepare(sql)?;
    let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let rows = stmt.query_map(params, |row| {
        let mut out = Row::new();
        for (index, name) in names.iter().enumerate() {
            out.insert(name.as_str(), to_value(row.get_ref(index)?));
        }
        Ok(out)
    })?;

    rows.collect()
}

impl Database {
    /// Runs a row-source query on `conn`.
    ///
    /// Failures are reported as [`Error::DataAccess`] naming the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement cannot be prepared or a row
    /// cannot be read.
    pub fn query_rows(conn: &Connection, query: &Query) -> Result<Vec<Row>> {
        let result = match query {
            Query::InvoicesWithStaysBeginning(date) => fetch_rows(
                conn,
                SELECT_INVOICES_WITH_STAYS_BEGINNING,
                params![format_date(*date)],
            ),
            Query::InvoicesWithStaysEnding(date) => fetch_rows(
                conn,
                SELECT_INVOICES_WITH_STAYS_ENDING,
                params![format_date(*date)],
            ),
            Query::ItineraryForInvoice(invoice_id) => {
                fetch_rows(conn, SELECT_ITINERARY_FOR_INVOICE, params![invoice_id])
            }
            Query::LockCombinationsForStay {
                facility_code,
                date,
            } => fetch_rows(
                conn,
                SELECT_LOCK_COMBINATIONS_FOR_STAY,
                params![facility_code, format_date(*date)],
            ),
        };

        let rows = result.map_err(|e| Error::data_access(query.to_string(), e))?;
        log::debug!("{query}: {} rows", rows.len());
        Ok(rows)
    }

    /// Inserts or replaces a facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_facility(conn: &Connection, facility: &Facility) -> Result<()> {
        conn.execute(INSERT_FACILITY, params![facility.code(), facility.name()])?;
        Ok(())
    }

    /// Inserts or replaces an invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_invoice(conn: &Connection, invoice: &Invoice) -> Result<()> {
        conn.execute(
            INSERT_INVOICE,
            params![
                invoice.id(),
                invoice.contact_id(),
                invoice.contact_email_address()
            ],
        )?;
        Ok(())
    }

    /// Inserts one booked night for an invoice at a facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_stay(
        conn: &Connection,
        invoice_id: i64,
        facility_code: &str,
        booking: &Booking,
    ) -> Result<()> {
        conn.execute(
            INSERT_STAY,
            params![
                invoice_id,
                facility_code,
                format_date(booking.date()),
                booking.occupant_count()
            ],
        )?;
        Ok(())
    }

    /// Inserts a lock combination for a facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_lock_combination(
        conn: &Connection,
        facility_code: &str,
        combination: &LockCombination,
    ) -> Result<()> {
        conn.execute(
            INSERT_LOCK_COMBINATION,
            params![
                facility_code,
                combination.value(),
                format_date(combination.valid_from()),
                format_date(combination.valid_to())
            ],
        )?;
        Ok(())
    }
}
