//! Reservations: the nights booked at one facility under one invoice.
//!
//! A reservation groups the [`Booking`]s for a single [`Facility`] and
//! exposes the derived stay properties used by lock-code and guest
//! communication logic: continuity, occupancy congruency, first and last
//! nights, departure date and group sizes.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::ValidationError;
use crate::{Booking, Facility};

#[cfg(test)]
mod proptests;

/// The bookings for one facility.
///
/// Bookings keep the order they were supplied in. Queries that depend on
/// chronology work on sorted copies or on the date bounds computed at
/// construction, so [`Reservation::group_sizes`] still lines up with the
/// caller's ordering.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merlin::{Booking, Facility, Reservation};
///
/// let facility = Facility::new("CH", "Canmore Clubhouse").unwrap();
/// let first = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
/// let last = NaiveDate::from_ymd_opt(2019, 3, 4).unwrap();
///
/// let reservation = Reservation::new(
///     facility,
///     vec![Booking::new(last, 3).unwrap(), Booking::new(first, 2).unwrap()],
/// )
/// .unwrap();
///
/// assert_eq!(reservation.first_night(), first);
/// assert_eq!(reservation.last_night(), last);
/// assert_eq!(reservation.departure_date(), NaiveDate::from_ymd_opt(2019, 3, 5).unwrap());
/// assert_eq!(reservation.group_sizes(), vec![3, 2]);
/// assert!(reservation.is_continuous());
/// assert!(!reservation.is_congruent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    facility: Facility,
    bookings: Vec<Booking>,
    first_night: NaiveDate,
    last_night: NaiveDate,
}

impl Reservation {
    /// Creates a reservation from a facility and its bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if `bookings` is empty.
    pub fn new(facility: Facility, bookings: Vec<Booking>) -> Result<Self, ValidationError> {
        let (first_night, last_night) = bookings
            .iter()
            .map(Booking::date)
            .fold(None, |bounds, date| match bounds {
                None => Some((date, date)),
                Some((lo, hi)) => Some((date.min(lo), date.max(hi))),
            })
            .ok_or_else(|| {
                ValidationError::new("bookings", "a reservation needs at least one booking")
            })?;

        Ok(Self {
            facility,
            bookings,
            first_night,
            last_night,
        })
    }

    /// Returns a new reservation with `booking` appended.
    #[must_use]
    pub fn with_booking(&self, booking: Booking) -> Self {
        let mut bookings = self.bookings.clone();
        bookings.push(booking);

        Self {
            facility: self.facility.clone(),
            bookings,
            first_night: self.first_night.min(booking.date()),
            last_night: self.last_night.max(booking.date()),
        }
    }

    /// Returns the facility that was booked.
    #[must_use]
    pub const fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Returns the bookings in the order they were supplied.
    #[must_use]
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the number of booked nights.
    #[must_use]
    pub fn number_of_nights(&self) -> usize {
        self.bookings.len()
    }

    /// Returns `true` if the booked nights form an unbroken run of days.
    ///
    /// A single booking is trivially continuous. Two bookings for the same
    /// night break continuity.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        let mut dates: Vec<NaiveDate> = self.bookings.iter().map(Booking::date).collect();
        dates.sort_unstable();

        dates
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if b.signed_duration_since(*a).num_days() == 1))
    }

    /// Returns `true` if every night has the same number of occupants.
    #[must_use]
    pub fn is_congruent(&self) -> bool {
        let mut counts = self.bookings.iter().map(Booking::occupant_count);
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }

    /// Returns the earliest booked night.
    #[must_use]
    pub const fn first_night(&self) -> NaiveDate {
        self.first_night
    }

    /// Returns the latest booked night.
    #[must_use]
    pub const fn last_night(&self) -> NaiveDate {
        self.last_night
    }

    /// Returns the day the guests leave, the morning after the last night.
    #[must_use]
    pub fn departure_date(&self) -> NaiveDate {
        // `Booking::new` rejects the last representable day.
        self.last_night + Days::new(1)
    }

    /// Returns the occupant count of each booking, in supplied order.
    #[must_use]
    pub fn group_sizes(&self) -> Vec<u32> {
        self.bookings.iter().map(Booking::occupant_count).collect()
    }
}
