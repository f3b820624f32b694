//! A single booked night.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ValidationError;

/// One night's stay at a facility for a group of occupants.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merlin::Booking;
///
/// let night = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
/// let booking = Booking::new(night, 2).unwrap();
/// assert_eq!(booking.occupant_count(), 2);
///
/// // An empty booking is not a booking
/// assert!(Booking::new(night, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Booking {
    date: NaiveDate,
    occupant_count: u32,
}

impl Booking {
    /// Creates a booking.
    ///
    /// # Errors
    ///
    /// Returns an error if `occupant_count` is zero, or if `date` is the last
    /// representable day, which leaves no morning to depart on.
    pub fn new(date: NaiveDate, occupant_count: u32) -> Result<Self, ValidationError> {
        if date == NaiveDate::MAX {
            return Err(ValidationError::new(
                "date",
                "a booked night must be followed by a departure day",
            ));
        }
        if occupant_count == 0 {
            return Err(ValidationError::new(
                "occupant_count",
                "a booking must have at least one occupant",
            ));
        }

        Ok(Self {
            date,
            occupant_count,
        })
    }

    /// Returns the booked night.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the number of people staying that night.
    #[must_use]
    pub const fn occupant_count(&self) -> u32 {
        self.occupant_count
    }
}
