//! End-to-end itinerary retrieval against a `SQLite` store.

mod common;

use common::{date, TestStore};
use merlin::operations::{ItineraryOrchestrator, SameDayPolicy};
use merlin::{Error, Itinerary};

const TODAY: &str = "2019-03-01";

/// Two guests:
/// - invoice 1 stays at CH 03-03..03-04 then EL 03-05 (arrives in 2 days)
/// - invoice 2 stays at CH 02-26..02-28 (left yesterday, last night 02-28)
fn seeded() -> TestStore {
    let store = TestStore::new();
    store
        .facility("CH", "Canmore Clubhouse")
        .facility("EL", "Elizabeth Parker")
        .invoice(1, "first@example.com")
        .nights(1, "CH", &["2019-03-03", "2019-03-04"], 4)
        .nights(1, "EL", &["2019-03-05"], 3)
        .invoice(2, "second@example.com")
        .nights(2, "CH", &["2019-02-26", "2019-02-27", "2019-02-28"], 2);
    store
}

fn emails(itineraries: &[Itinerary]) -> Vec<String> {
    itineraries
        .iter()
        .map(|i| i.guest().email_address().to_string())
        .collect()
}

#[test]
fn test_positive_delay_finds_arrivals() {
    let store = seeded();
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(2)
        .unwrap();

    assert_eq!(emails(&itineraries), vec!["first@example.com"]);

    let itinerary = &itineraries[0];
    let codes: Vec<&str> = itinerary.facilities().map(|f| f.code()).collect();
    assert_eq!(codes, vec!["CH", "EL"]);
    assert_eq!(itinerary.check_in_date(), Some(date("2019-03-03")));
    assert_eq!(itinerary.check_out_date(), Some(date("2019-03-06")));

    let ch = &itinerary.reservations()[0];
    assert!(ch.is_continuous());
    assert!(ch.is_congruent());
    assert_eq!(ch.group_sizes(), vec![4, 4]);
}

#[test]
fn test_negative_delay_finds_departures() {
    let store = seeded();
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(-1)
        .unwrap();

    assert_eq!(emails(&itineraries), vec!["second@example.com"]);
    assert_eq!(itineraries[0].reservations()[0].number_of_nights(), 3);
}

#[test]
fn test_zero_delay_lists_departures_twice_by_default() {
    let store = seeded();
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date("2019-02-28"))
        .build_for_delay(0)
        .unwrap();

    assert_eq!(
        emails(&itineraries),
        vec!["second@example.com", "second@example.com"]
    );
    assert_eq!(itineraries[0], itineraries[1]);
}

#[test]
fn test_zero_delay_beginning_and_ending() {
    let store = seeded();
    store
        .invoice(3, "third@example.com")
        .nights(3, "EL", &["2019-02-28", "2019-03-01"], 1);
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date("2019-02-28"))
        .with_same_day_policy(SameDayPolicy::BeginningAndEnding)
        .build_for_delay(0)
        .unwrap();

    assert_eq!(
        emails(&itineraries),
        vec!["third@example.com", "second@example.com"]
    );
}

#[test]
fn test_no_matching_stays() {
    let store = seeded();
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(30)
        .unwrap();

    assert!(itineraries.is_empty());
}

#[test]
fn test_gap_in_stay_is_not_continuous() {
    let store = TestStore::new();
    store
        .facility("CH", "Canmore Clubhouse")
        .invoice(9, "gap@example.com")
        .nights(9, "CH", &["2019-03-03", "2019-03-05"], 2)
        .nights(9, "CH", &["2019-03-04"], 5);
    let source = store.row_source();

    let itineraries = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(2)
        .unwrap();

    let reservation = &itineraries[0].reservations()[0];
    assert!(reservation.is_continuous());
    assert!(!reservation.is_congruent());
    assert_eq!(reservation.group_sizes(), vec![2, 2, 5]);
}

#[test]
fn test_invalid_contact_address_aborts() {
    let store = seeded();
    store
        .invoice(4, "not an address")
        .nights(4, "CH", &["2019-03-03"], 1);
    let source = store.row_source();

    let err = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(2)
        .unwrap_err();

    match err {
        Error::MalformedRow { query, column, .. } => {
            assert!(query.contains("invoice 4"));
            assert_eq!(column, "contact_email_address");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_corrupt_stay_row_aborts() {
    let store = seeded();
    store.execute("UPDATE stays SET stay_date = 'someday' WHERE invoice_id = 1 AND facility_code = 'EL'");
    let source = store.row_source();

    let err = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(2)
        .unwrap_err();

    assert!(err.is_malformed_row());
    assert!(err.to_string().contains("itinerary for invoice 1"));
}

#[test]
fn test_missing_table_is_data_access() {
    let store = seeded();
    store.execute("DROP TABLE stays");
    let source = store.row_source();

    let err = ItineraryOrchestrator::new(&source)
        .with_today(date(TODAY))
        .build_for_delay(2)
        .unwrap_err();

    assert!(err.is_data_access());
}
