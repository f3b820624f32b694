//! Itineraries: a guest and the reservations on their invoice.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{Facility, Guest, Reservation};

/// Everything a guest has booked under one invoice.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merlin::{Booking, EmailAddress, Facility, Guest, Itinerary, Reservation};
///
/// let night = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
/// let reservation = Reservation::new(
///     Facility::new("CH", "Canmore Clubhouse").unwrap(),
///     vec![Booking::new(night, 2).unwrap()],
/// )
/// .unwrap();
///
/// let guest = Guest::new(EmailAddress::new("guest@example.com").unwrap());
/// let itinerary = Itinerary::new(guest, vec![reservation]);
///
/// assert_eq!(itinerary.check_in_date(), Some(night));
/// assert_eq!(itinerary.check_out_date(), NaiveDate::from_ymd_opt(2019, 3, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    guest: Guest,
    reservations: Vec<Reservation>,
}

impl Itinerary {
    /// Creates an itinerary.
    #[must_use]
    pub const fn new(guest: Guest, reservations: Vec<Reservation>) -> Self {
        Self {
            guest,
            reservations,
        }
    }

    /// Returns the guest.
    #[must_use]
    pub const fn guest(&self) -> &Guest {
        &self.guest
    }

    /// Returns the reservations in the order the data store listed them.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Returns the first night across all reservations.
    #[must_use]
    pub fn check_in_date(&self) -> Option<NaiveDate> {
        self.reservations.iter().map(Reservation::first_night).min()
    }

    /// Returns the last departure across all reservations.
    #[must_use]
    pub fn check_out_date(&self) -> Option<NaiveDate> {
        self.reservations
            .iter()
            .map(Reservation::departure_date)
            .max()
    }

    /// Returns the booked facilities in reservation order.
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> {
        self.reservations.iter().map(Reservation::facility)
    }
}
