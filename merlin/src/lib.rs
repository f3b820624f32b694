#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # merlin
//!
//! A library for assembling guest itineraries from hut reservation data.
//!
//! Raw stay rows come from a [`RowSource`]. The row mapper turns them into
//! domain values, the aggregator groups booked nights into one
//! [`Reservation`] per facility, and the delay orchestrator finds the
//! invoices whose stays begin or end a given number of days from today
//! and builds one [`Itinerary`] per invoice.
//!
//! ## Core Types
//!
//! - [`Facility`], [`Booking`], and [`Reservation`]: what was booked
//! - [`Visit`]: a stay described by start date and length
//! - [`Guest`] and [`EmailAddress`]: who booked it
//! - [`Invoice`] and [`LockCombination`]: raw records from the store
//! - [`Itinerary`]: a guest and their reservations
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use merlin::{Booking, Facility, Reservation};
//!
//! let night = |d| NaiveDate::from_ymd_opt(2019, 3, d).unwrap();
//! let reservation = Reservation::new(
//!     Facility::new("CH", "Canmore Clubhouse").unwrap(),
//!     vec![
//!         Booking::new(night(4), 2).unwrap(),
//!         Booking::new(night(3), 2).unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(reservation.is_continuous());
//! assert!(reservation.is_congruent());
//! assert_eq!(reservation.first_night(), night(3));
//! assert_eq!(reservation.departure_date(), night(5));
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod facility;
pub mod guest;
pub mod invoice;
pub mod itinerary;
pub mod logging;
pub mod mapping;
pub mod operations;
pub mod reservation;
pub mod row;
pub mod source;
pub mod visit;

// Re-export key types at crate root for convenience
pub use booking::Booking;
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, SqliteRowSource};
pub use error::{Error, Result, ValidationError};
pub use facility::Facility;
pub use guest::{EmailAddress, Guest};
pub use invoice::{Invoice, LockCombination};
pub use itinerary::Itinerary;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    build_itineraries_for_delay, get_lock_combinations, ItineraryOrchestrator, ItineraryPlan,
    PlanAction, SameDayPolicy,
};
pub use reservation::Reservation;
pub use row::{Row, Value};
pub use source::{Query, RowSource};
pub use visit::{Visit, VisitBuilder};
