//! Property-based tests for `Reservation`.

use super::Reservation;
use crate::{Booking, Facility};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn facility() -> Facility {
    Facility::new("CH", "Canmore Clubhouse").unwrap()
}

// Strategy for generating a start date within a few years of 2019
fn start_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..2000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2019, 1, 1).unwrap() + Days::new(offset)
    })
}

// Strategy for generating a run of consecutive nights in shuffled order
fn shuffled_run_strategy() -> impl Strategy<Value = Vec<NaiveDate>> {
    (start_strategy(), 1u64..15).prop_flat_map(|(start, len)| {
        let run: Vec<NaiveDate> = (0..len).map(|i| start + Days::new(i)).collect();
        Just(run).prop_shuffle()
    })
}

fn bookings_for(dates: &[NaiveDate], occupants: u32) -> Vec<Booking> {
    dates
        .iter()
        .map(|date| Booking::new(*date, occupants).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_global_rejects: 4096,
        .. ProptestConfig::default()
    })]

    // Consecutive nights are continuous whatever order they arrive in
    #[test]
    fn consecutive_nights_are_continuous(dates in shuffled_run_strategy()) {
        let reservation = Reservation::new(facility(), bookings_for(&dates, 2)).unwrap();
        prop_assert!(reservation.is_continuous());
    }

    // Removing an interior night leaves a gap of two days
    #[test]
    fn interior_gap_is_not_continuous(start in start_strategy(), len in 3u64..15, hole in 1u64..14) {
        prop_assume!(hole < len - 1);
        let dates: Vec<NaiveDate> = (0..len)
            .filter(|i| *i != hole)
            .map(|i| start + Days::new(i))
            .collect();

        let reservation = Reservation::new(facility(), bookings_for(&dates, 2)).unwrap();
        prop_assert!(!reservation.is_continuous());
    }

    // First and last night are the min and max regardless of order
    #[test]
    fn bounds_match_min_and_max(dates in prop::collection::vec(start_strategy(), 1..20)) {
        let reservation = Reservation::new(facility(), bookings_for(&dates, 1)).unwrap();

        prop_assert_eq!(reservation.first_night(), *dates.iter().min().unwrap());
        prop_assert_eq!(reservation.last_night(), *dates.iter().max().unwrap());
        prop_assert_eq!(reservation.departure_date(), reservation.last_night() + Days::new(1));
    }

    // Group sizes follow the supplied booking order exactly
    #[test]
    fn group_sizes_preserve_order(counts in prop::collection::vec(1u32..12, 1..20), start in start_strategy()) {
        let bookings: Vec<Booking> = counts
            .iter()
            .enumerate()
            .map(|(i, count)| Booking::new(start + Days::new(i as u64), *count).unwrap())
            .collect();

        let reservation = Reservation::new(facility(), bookings).unwrap();
        prop_assert_eq!(reservation.group_sizes(), counts.clone());
        prop_assert_eq!(reservation.is_congruent(), counts.iter().all(|c| *c == counts[0]));
    }
}
