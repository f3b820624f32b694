//! Raw rows as produced by a row source.
//!
//! A [`Row`] is an ordered set of named columns holding scalar
//! [`Value`]s. The typed accessors do the parsing every mapper needs and
//! report failures as [`MalformedRowError`], which carries the column but
//! not the query; the caller attaches that with
//! [`MalformedRowError::within`].

use std::fmt;

use chrono::NaiveDate;

use crate::error::Error;

/// Date format used by the data store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scalar column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    /// A whole number.
    Integer(i64),
    /// A floating point number.
    Real(f64),
    /// Text, including dates in `YYYY-MM-DD` form.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Text(value.format(DATE_FORMAT).to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A column could not be read as the expected type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRowError {
    /// The offending column.
    pub column: String,
    /// What was wrong with it.
    pub reason: String,
}

impl MalformedRowError {
    pub(crate) fn new(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Converts into a library error, recording the query the row came from.
    pub fn within(self, query: impl fmt::Display) -> Error {
        Error::MalformedRow {
            query: query.to_string(),
            column: self.column,
            reason: self.reason,
        }
    }
}

impl fmt::Display for MalformedRowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column '{}' {}", self.column, self.reason)
    }
}

impl std::error::Error for MalformedRowError {}

/// One row of named scalar columns.
///
/// # Examples
///
/// ```
/// use merlin::row::Row;
///
/// let row = Row::new()
///     .with("invoice_id", "42")
///     .with("contact_id", 7_i64)
///     .with("contact_email_address", "guest@example.com");
///
/// assert_eq!(row.integer("invoice_id").unwrap(), 42);
/// assert_eq!(row.integer("contact_id").unwrap(), 7);
/// assert!(row.integer("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the row with `column` set to `value`, replacing any earlier value.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets `column` to `value`, replacing any earlier value.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.columns.push((column, value)),
        }
    }

    /// Returns the raw value of `column`, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Returns the column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    fn required(&self, column: &str) -> Result<&Value, MalformedRowError> {
        match self.get(column) {
            None => Err(MalformedRowError::new(column, "is missing")),
            Some(Value::Null) => Err(MalformedRowError::new(column, "is null")),
            Some(value) => Ok(value),
        }
    }

    /// Reads `column` as text. Integers are rendered in decimal.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing, null or a real number.
    pub fn text(&self, column: &str) -> Result<String, MalformedRowError> {
        match self.required(column)? {
            Value::Text(s) => Ok(s.clone()),
            Value::Integer(i) => Ok(i.to_string()),
            other => Err(MalformedRowError::new(
                column,
                format!("is not text: {other}"),
            )),
        }
    }

    /// Reads `column` as an integer, parsing decimal text if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing, null or not a whole number.
    pub fn integer(&self, column: &str) -> Result<i64, MalformedRowError> {
        match self.required(column)? {
            Value::Integer(i) => Ok(*i),
            Value::Text(s) => s.trim().parse().map_err(|_| {
                MalformedRowError::new(column, format!("is not an integer: '{s}'"))
            }),
            other => Err(MalformedRowError::new(
                column,
                format!("is not an integer: {other}"),
            )),
        }
    }

    /// Reads `column` as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, optionally followed by a time part separated by
    /// a space or `T`, which is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is missing, null or not a date.
    pub fn date(&self, column: &str) -> Result<NaiveDate, MalformedRowError> {
        match self.required(column)? {
            Value::Text(s) => {
                let day = s
                    .trim()
                    .split([' ', 'T'])
                    .next()
                    .unwrap_or_default();
                NaiveDate::parse_from_str(day, DATE_FORMAT)
                    .map_err(|_| MalformedRowError::new(column, format!("is not a date: '{s}'")))
            }
            other => Err(MalformedRowError::new(
                column,
                format!("is not a date: {other}"),
            )),
        }
    }
}
