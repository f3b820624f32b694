//! Row mapping: pure conversions from raw rows to domain values.
//!
//! Every function here is side-effect free. Failures are reported as
//! [`MalformedRowError`] so the caller can attach the query the rows came
//! from.

use std::collections::HashMap;

use crate::row::{MalformedRowError, Row};
use crate::{Booking, Facility, Invoice, LockCombination, Reservation};

/// Maps an `invoice_id, contact_id, contact_email_address` row to an [`Invoice`].
///
/// # Errors
///
/// Returns an error if either id is not an integer or the address is missing.
///
/// # Examples
///
/// ```
/// use merlin::mapping::row_to_invoice;
/// use merlin::row::Row;
///
/// let row = Row::new()
///     .with("invoice_id", "1001")
///     .with("contact_id", "55")
///     .with("contact_email_address", "guest@example.com");
///
/// let invoice = row_to_invoice(&row).unwrap();
/// assert_eq!(invoice.id(), 1001);
/// assert_eq!(invoice.contact_email_address(), "guest@example.com");
/// ```
pub fn row_to_invoice(row: &Row) -> Result<Invoice, MalformedRowError> {
    Ok(Invoice::new(
        row.integer("invoice_id")?,
        row.integer("contact_id")?,
        row.text("contact_email_address")?,
    ))
}

/// Maps a `combination, valid_from, valid_until` row to a [`LockCombination`].
///
/// # Errors
///
/// Returns an error if either date cannot be parsed.
pub fn row_to_lock_combination(row: &Row) -> Result<LockCombination, MalformedRowError> {
    Ok(LockCombination::new(
        row.text("combination")?,
        row.date("valid_from")?,
        row.date("valid_until")?,
    ))
}

/// Maps a `stay_date, no_users` row to a [`Booking`].
///
/// # Errors
///
/// Returns an error if the date is unparsable or the occupant count is not
/// a positive integer.
pub fn row_to_booking(row: &Row) -> Result<Booking, MalformedRowError> {
    let date = row.date("stay_date")?;
    let occupants = row.integer("no_users")?;
    let occupants = u32::try_from(occupants).map_err(|_| {
        MalformedRowError::new("no_users", format!("is out of range: {occupants}"))
    })?;

    Booking::new(date, occupants).map_err(|e| {
        let column = if e.field == "date" { "stay_date" } else { "no_users" };
        MalformedRowError::new(column, e.message)
    })
}

fn row_to_facility(row: &Row) -> Result<Facility, MalformedRowError> {
    let code = row.text("facility_code")?;
    let name = row.text("facility_name")?;
    Facility::new(code, name).map_err(|e| MalformedRowError::new("facility_code", e.message))
}

/// Groups stay rows into one [`Reservation`] per facility.
///
/// Rows are keyed by `(facility_code, facility_name)`. Groups appear in the
/// order their facility was first seen, and bookings within a group keep
/// row order.
///
/// # Errors
///
/// Returns the first row that cannot be mapped.
///
/// # Examples
///
/// ```
/// use merlin::mapping::rows_to_reservations;
/// use merlin::row::Row;
///
/// let stay = |code: &str, date: &str, users: i64| {
///     Row::new()
///         .with("facility_code", code)
///         .with("facility_name", format!("Hut {code}"))
///         .with("stay_date", date)
///         .with("no_users", users)
/// };
///
/// let rows = vec![
///     stay("EL", "2019-03-04", 2),
///     stay("CH", "2019-03-03", 4),
///     stay("EL", "2019-03-03", 3),
/// ];
///
/// let reservations = rows_to_reservations(&rows).unwrap();
/// assert_eq!(reservations.len(), 2);
/// assert_eq!(reservations[0].facility().code(), "EL");
/// assert_eq!(reservations[0].group_sizes(), vec![2, 3]);
/// assert_eq!(reservations[1].facility().code(), "CH");
/// ```
pub fn rows_to_reservations(rows: &[Row]) -> Result<Vec<Reservation>, MalformedRowError> {
    let mut index: HashMap<Facility, usize> = HashMap::new();
    let mut groups: Vec<(Facility, Vec<Booking>)> = Vec::new();

    for row in rows {
        let facility = row_to_facility(row)?;
        let booking = row_to_booking(row)?;

        match index.get(&facility) {
            Some(&slot) => {
                if let Some((_, bookings)) = groups.get_mut(slot) {
                    bookings.push(booking);
                }
            }
            None => {
                index.insert(facility.clone(), groups.len());
                groups.push((facility, vec![booking]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(facility, bookings)| {
            Reservation::new(facility, bookings)
                .map_err(|e| MalformedRowError::new(e.field, e.message))
        })
        .collect()
}
