//! Error types for the merlin library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a merlin error.
///
/// # Examples
///
/// ```
/// use merlin::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the merlin library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required value was missing or failed local validation.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument {
        /// The field that was rejected.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A row returned by the row source could not be mapped into the
    /// expected domain shape.
    #[error("malformed row from {query}: column '{column}' {reason}")]
    MalformedRow {
        /// The query that produced the row.
        query: String,
        /// The offending column.
        column: String,
        /// What was wrong with the column value.
        reason: String,
    },

    /// The row source itself failed.
    #[error("data access failed during {query}: {source}")]
    DataAccess {
        /// The query that was in flight.
        query: String,
        /// The underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration value was invalid.
    #[error("configuration error for '{field}': {message}")]
    Configuration {
        /// The configuration field or source that failed.
        field: String,
        /// A description of the failure.
        message: String,
    },

    /// A configuration or database file could not be read.
    #[error("cannot read {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the path is unusable.
        reason: String,
    },

    /// A schema or seeding statement failed outside any row-source query.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database schema has a version this build does not understand.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// A domain value failed validation at construction time.
///
/// Returned by the value-type constructors and converted into
/// [`Error::InvalidArgument`] at the crate boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::InvalidArgument {
            field: err.field,
            reason: err.message,
        }
    }
}

impl Error {
    /// Wraps an underlying row-source failure with the query that was in flight.
    pub fn data_access(
        query: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::DataAccess {
            query: query.into(),
            source: source.into(),
        }
    }

    /// Check if the error came from the row source.
    ///
    /// # Examples
    ///
    /// ```
    /// use merlin::Error;
    ///
    /// let err = Error::data_access("invoices ending 2019-03-04", "connection refused");
    /// assert!(err.is_data_access());
    /// ```
    #[must_use]
    pub fn is_data_access(&self) -> bool {
        matches!(self, Self::DataAccess { .. })
    }

    /// Check if the error is a row that could not be mapped.
    #[must_use]
    pub fn is_malformed_row(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }

    /// Check if the error is a rejected argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
