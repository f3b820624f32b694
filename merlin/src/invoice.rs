//! Invoices and the lock combinations issued for stays.

use chrono::NaiveDate;
use serde::Serialize;

/// An invoice from the reservation data store.
///
/// The contact email address is kept as the raw string from the store;
/// it is validated when the invoice is turned into a [`crate::Guest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    id: i64,
    contact_id: i64,
    contact_email_address: String,
}

impl Invoice {
    /// Creates an invoice.
    #[must_use]
    pub fn new(id: i64, contact_id: i64, contact_email_address: impl Into<String>) -> Self {
        Self {
            id,
            contact_id,
            contact_email_address: contact_email_address.into(),
        }
    }

    /// Returns the invoice id.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the id of the contact the invoice is billed to.
    #[must_use]
    pub const fn contact_id(&self) -> i64 {
        self.contact_id
    }

    /// Returns the contact's email address as stored.
    #[must_use]
    pub fn contact_email_address(&self) -> &str {
        &self.contact_email_address
    }
}

/// A door code and the dates it is valid for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockCombination {
    value: String,
    valid_from: NaiveDate,
    valid_to: NaiveDate,
}

impl LockCombination {
    /// Creates a lock combination.
    #[must_use]
    pub fn new(value: impl Into<String>, valid_from: NaiveDate, valid_to: NaiveDate) -> Self {
        Self {
            value: value.into(),
            valid_from,
            valid_to,
        }
    }

    /// Returns the combination itself.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the first day the combination opens the lock.
    #[must_use]
    pub const fn valid_from(&self) -> NaiveDate {
        self.valid_from
    }

    /// Returns the last day the combination opens the lock.
    #[must_use]
    pub const fn valid_to(&self) -> NaiveDate {
        self.valid_to
    }

    /// Returns `true` if the combination is valid on `date`, inclusive of both ends.
    #[must_use]
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}
