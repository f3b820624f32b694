//! The row-source contract consumed by the orchestration layer.
//!
//! A row source runs the four stay queries against whatever data store
//! backs it and returns raw [`Row`]s. The SQLite implementation lives in
//! [`crate::database`]; tests substitute a mock.

use std::fmt;

use chrono::NaiveDate;

use crate::error::Result;
use crate::row::Row;

/// Identifies one row-source query and its parameters.
///
/// Used to attach context to errors and log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Invoices whose earliest booked night is the date.
    InvoicesWithStaysBeginning(NaiveDate),
    /// Invoices whose latest booked night is the date.
    InvoicesWithStaysEnding(NaiveDate),
    /// The stay rows billed to an invoice.
    ItineraryForInvoice(i64),
    /// The lock combinations valid for a facility on a date.
    LockCombinationsForStay {
        /// The facility code.
        facility_code: String,
        /// The stay date.
        date: NaiveDate,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvoicesWithStaysBeginning(date) => {
                write!(f, "invoices with stays beginning {date}")
            }
            Self::InvoicesWithStaysEnding(date) => write!(f, "invoices with stays ending {date}"),
            Self::ItineraryForInvoice(id) => write!(f, "itinerary for invoice {id}"),
            Self::LockCombinationsForStay {
                facility_code,
                date,
            } => write!(f, "lock combinations for {facility_code} on {date}"),
        }
    }
}

/// Source of raw stay rows.
///
/// Implementations must fully read a query's rows before returning and
/// must release any connection they acquired on both the success and the
/// failure path. Failures are reported as [`crate::Error::DataAccess`].
#[cfg_attr(test, mockall::automock)]
pub trait RowSource {
    /// Rows of `invoice_id, contact_id, contact_email_address` for invoices
    /// whose stay begins on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn invoices_with_stays_beginning(&self, date: NaiveDate) -> Result<Vec<Row>>;

    /// Rows of `invoice_id, contact_id, contact_email_address` for invoices
    /// whose stay ends on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn invoices_with_stays_ending(&self, date: NaiveDate) -> Result<Vec<Row>>;

    /// Rows of `facility_code, facility_name, stay_date, no_users` for the
    /// nights billed to `invoice_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn itinerary_for_invoice(&self, invoice_id: i64) -> Result<Vec<Row>>;

    /// Rows of `combination, valid_from, valid_until` for the facility on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn lock_combinations_for_stay(&self, facility_code: &str, date: NaiveDate)
        -> Result<Vec<Row>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_descriptions() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();

        assert_eq!(
            Query::InvoicesWithStaysBeginning(date).to_string(),
            "invoices with stays beginning 2019-03-03"
        );
        assert_eq!(
            Query::InvoicesWithStaysEnding(date).to_string(),
            "invoices with stays ending 2019-03-03"
        );
        assert_eq!(
            Query::ItineraryForInvoice(9).to_string(),
            "itinerary for invoice 9"
        );
        assert_eq!(
            Query::LockCombinationsForStay {
                facility_code: "CH".into(),
                date
            }
            .to_string(),
            "lock combinations for CH on 2019-03-03"
        );
    }
}
