//! Visits: a stay at a facility described by its start date and length.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::ValidationError;
use crate::Facility;

/// Returns the current local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A stay at a facility.
///
/// Visits are built with [`Visit::builder`]. Only the facility is
/// required; the start date defaults to today and the stay defaults to a
/// single night.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merlin::{Facility, Visit};
///
/// let facility = Facility::new("CH", "Canmore Clubhouse").unwrap();
/// let visit = Visit::builder()
///     .facility(facility)
///     .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
///     .number_of_nights(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(visit.end_date(), NaiveDate::from_ymd_opt(2018, 1, 6).unwrap());
/// assert!(visit.is_finished());
///
/// // A visit without a facility cannot exist
/// assert!(Visit::builder().build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    facility: Facility,
    start_date: NaiveDate,
    number_of_nights: u32,
}

impl Visit {
    /// Creates a new visit builder.
    #[must_use]
    pub fn builder() -> VisitBuilder {
        VisitBuilder::default()
    }

    /// Returns the facility being visited.
    #[must_use]
    pub const fn facility(&self) -> &Facility {
        &self.facility
    }

    /// Returns the first night of the visit.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the length of the visit in nights.
    #[must_use]
    pub const fn number_of_nights(&self) -> u32 {
        self.number_of_nights
    }

    /// Returns the date the visit ends: the start date plus the number of nights.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        // Construction guarantees the sum is representable.
        self.start_date + Days::new(u64::from(self.number_of_nights))
    }

    /// Returns `true` if the visit ended before today.
    ///
    /// A visit ending today is not finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_finished_on(today())
    }

    /// Returns `true` if the visit ended strictly before `date`.
    #[must_use]
    pub fn is_finished_on(&self, date: NaiveDate) -> bool {
        self.end_date() < date
    }

    /// Returns a copy of this visit starting on `start_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the visit would end past the last representable day.
    pub fn with_start_date(&self, start_date: NaiveDate) -> Result<Self, ValidationError> {
        validate_span(start_date, self.number_of_nights)?;
        Ok(Self {
            start_date,
            ..self.clone()
        })
    }

    /// Returns a copy of this visit lasting `number_of_nights`.
    ///
    /// # Errors
    ///
    /// Returns an error if `number_of_nights` is zero or the visit would end
    /// past the last representable day.
    pub fn with_number_of_nights(&self, number_of_nights: u32) -> Result<Self, ValidationError> {
        let number_of_nights = validate_nights(number_of_nights)?;
        validate_span(self.start_date, number_of_nights)?;
        Ok(Self {
            number_of_nights,
            ..self.clone()
        })
    }
}

fn validate_nights(number_of_nights: u32) -> Result<u32, ValidationError> {
    if number_of_nights == 0 {
        return Err(ValidationError::new(
            "number_of_nights",
            "a visit must last at least one night",
        ));
    }
    Ok(number_of_nights)
}

fn validate_span(start_date: NaiveDate, number_of_nights: u32) -> Result<(), ValidationError> {
    match start_date.checked_add_days(Days::new(u64::from(number_of_nights))) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(
            "start_date",
            format!("{number_of_nights} nights from {start_date} is outside the calendar"),
        )),
    }
}

/// Builder for creating `Visit` instances.
#[derive(Debug, Default)]
pub struct VisitBuilder {
    facility: Option<Facility>,
    start_date: Option<NaiveDate>,
    number_of_nights: Option<u32>,
}

impl VisitBuilder {
    /// Sets the facility. Required.
    #[must_use]
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = Some(facility);
        self
    }

    /// Sets the first night. Defaults to today.
    #[must_use]
    pub const fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the length of the stay. Defaults to one night.
    #[must_use]
    pub const fn number_of_nights(mut self, number_of_nights: u32) -> Self {
        self.number_of_nights = Some(number_of_nights);
        self
    }

    /// Builds the visit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No facility was given
    /// - The number of nights is zero
    /// - The visit would end past the last representable day
    pub fn build(self) -> Result<Visit, ValidationError> {
        let facility = self
            .facility
            .ok_or_else(|| ValidationError::new("facility", "a visit requires a facility"))?;
        let start_date = self.start_date.unwrap_or_else(today);
        let number_of_nights = validate_nights(self.number_of_nights.unwrap_or(1))?;
        validate_span(start_date, number_of_nights)?;

        Ok(Visit {
            facility,
            start_date,
            number_of_nights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility() -> Facility {
        Facility::new("CH", "Canmore Clubhouse").unwrap()
    }

    fn minimal() -> Visit {
        Visit::builder().facility(facility()).build().unwrap()
    }

    #[test]
    fn test_defaults() {
        let visit = minimal();
        assert_eq!(visit.facility(), &facility());
        assert_eq!(visit.start_date(), today());
        assert_eq!(visit.number_of_nights(), 1);
    }

    #[test]
    fn test_missing_facility_rejected() {
        let err = Visit::builder().number_of_nights(2).build().unwrap_err();
        assert_eq!(err.field, "facility");

        let lib_err: crate::Error = err.into();
        assert!(lib_err.is_invalid_argument());
    }

    #[test]
    fn test_zero_nights_rejected() {
        let err = Visit::builder()
            .facility(facility())
            .number_of_nights(0)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "number_of_nights");
    }

    #[test]
    fn test_end_date_adds_nights() {
        let visit = minimal();
        assert_eq!(visit.end_date(), visit.start_date() + Days::new(1));
    }

    #[test]
    fn test_not_finished_when_starting_today() {
        let visit = Visit::builder()
            .facility(facility())
            .start_date(today())
            .number_of_nights(5)
            .build()
            .unwrap();
        assert!(!visit.is_finished());
    }

    #[test]
    fn test_finished_in_the_past() {
        let visit = Visit::builder()
            .facility(facility())
            .start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
            .number_of_nights(5)
            .build()
            .unwrap();
        assert!(visit.is_finished());
    }

    #[test]
    fn test_ending_today_is_not_finished() {
        let start = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
        let visit = Visit::builder()
            .facility(facility())
            .start_date(start)
            .number_of_nights(2)
            .build()
            .unwrap();

        let end = NaiveDate::from_ymd_opt(2019, 3, 5).unwrap();
        assert!(!visit.is_finished_on(end));
        assert!(visit.is_finished_on(end + Days::new(1)));
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let visit = minimal();
        let moved = visit
            .with_start_date(NaiveDate::from_ymd_opt(2019, 3, 3).unwrap())
            .unwrap();
        let longer = visit.with_number_of_nights(4).unwrap();

        assert_eq!(visit.start_date(), today());
        assert_eq!(visit.number_of_nights(), 1);
        assert_eq!(moved.start_date(), NaiveDate::from_ymd_opt(2019, 3, 3).unwrap());
        assert_eq!(longer.number_of_nights(), 4);
        assert!(visit.with_number_of_nights(0).is_err());
    }

    #[test]
    fn test_end_past_calendar_rejected() {
        let err = Visit::builder()
            .facility(facility())
            .start_date(NaiveDate::MAX)
            .build()
            .unwrap_err();
        assert_eq!(err.field, "start_date");

        let eve = NaiveDate::MAX.pred_opt().unwrap();
        let visit = Visit::builder()
            .facility(facility())
            .start_date(eve)
            .build()
            .unwrap();
        assert_eq!(visit.end_date(), NaiveDate::MAX);
        assert!(!visit.is_finished());

        assert_eq!(visit.with_number_of_nights(2).unwrap_err().field, "start_date");
        assert_eq!(minimal().with_start_date(NaiveDate::MAX).unwrap_err().field, "start_date");
    }
}
