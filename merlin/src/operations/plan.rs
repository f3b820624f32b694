//! Plan types for itinerary retrieval.
//!
//! A plan records which stay-window queries a delay resolves to, without
//! running them. Plans can be inspected, logged, or handed to the
//! orchestrator for execution.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::source::Query;

/// How a delay of zero days is searched.
///
/// # Examples
///
/// ```
/// use merlin::operations::SameDayPolicy;
///
/// assert_eq!(SameDayPolicy::default(), SameDayPolicy::RepeatEnding);
/// assert_eq!(SameDayPolicy::parse("beginning-and-ending").unwrap(),
///            SameDayPolicy::BeginningAndEnding);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SameDayPolicy {
    /// Run the "stays ending" query twice. Matches the historical behavior
    /// of the scheduling job; every invoice found is listed twice.
    #[default]
    RepeatEnding,
    /// Run one "stays beginning" and one "stays ending" query.
    BeginningAndEnding,
}

impl SameDayPolicy {
    /// Parses a policy name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "repeat-ending" => Ok(Self::RepeatEnding),
            "beginning-and-ending" => Ok(Self::BeginningAndEnding),
            _ => Err(Error::Configuration {
                field: "same_day_policy".into(),
                message: format!(
                    "unknown policy '{s}', expected 'repeat-ending' or 'beginning-and-ending'"
                ),
            }),
        }
    }
}

impl fmt::Display for SameDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatEnding => write!(f, "repeat-ending"),
            Self::BeginningAndEnding => write!(f, "beginning-and-ending"),
        }
    }
}

/// One invoice query in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    /// Fetch invoices whose stay begins on the date.
    InvoicesWithStaysBeginning(NaiveDate),
    /// Fetch invoices whose stay ends on the date.
    InvoicesWithStaysEnding(NaiveDate),
}

impl PlanAction {
    /// Returns the row-source query this action runs.
    #[must_use]
    pub fn query(&self) -> Query {
        match *self {
            Self::InvoicesWithStaysBeginning(date) => Query::InvoicesWithStaysBeginning(date),
            Self::InvoicesWithStaysEnding(date) => Query::InvoicesWithStaysEnding(date),
        }
    }

    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InvoicesWithStaysBeginning(date) => {
                format!("Find invoices with stays beginning {date}")
            }
            Self::InvoicesWithStaysEnding(date) => {
                format!("Find invoices with stays ending {date}")
            }
        }
    }
}

/// The queries a delay resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryPlan {
    /// The offset in days from `today` that produced this plan.
    pub delay: i64,

    /// The date searched: today plus the delay.
    pub search_date: NaiveDate,

    /// The invoice queries, in execution order.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the caller.
    pub warnings: Vec<String>,
}

impl ItineraryPlan {
    /// Plans the invoice queries for `delay` days from `today`.
    ///
    /// - A positive delay searches for stays beginning on the target date.
    /// - A negative delay searches for stays ending on the target date.
    /// - A zero delay runs two queries chosen by `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the target date is outside the calendar range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use merlin::operations::{ItineraryPlan, PlanAction, SameDayPolicy};
    ///
    /// let today = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
    /// let plan = ItineraryPlan::for_delay(2, today, SameDayPolicy::default()).unwrap();
    ///
    /// let target = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
    /// assert_eq!(plan.actions, vec![PlanAction::InvoicesWithStaysBeginning(target)]);
    /// ```
    pub fn for_delay(delay: i64, today: NaiveDate, policy: SameDayPolicy) -> Result<Self> {
        let search_date = offset_date(today, delay)?;

        let mut plan = Self {
            delay,
            search_date,
            actions: Vec::new(),
            warnings: Vec::new(),
        };

        match delay.signum() {
            1 => plan.actions.push(PlanAction::InvoicesWithStaysBeginning(search_date)),
            -1 => plan.actions.push(PlanAction::InvoicesWithStaysEnding(search_date)),
            _ => match policy {
                SameDayPolicy::RepeatEnding => {
                    plan.actions.push(PlanAction::InvoicesWithStaysEnding(search_date));
                    plan.actions.push(PlanAction::InvoicesWithStaysEnding(search_date));
                    plan.warnings.push(format!(
                        "same-day search repeats the stays-ending query for {search_date}; \
                         each invoice found will be listed twice"
                    ));
                }
                SameDayPolicy::BeginningAndEnding => {
                    plan.actions.push(PlanAction::InvoicesWithStaysBeginning(search_date));
                    plan.actions.push(PlanAction::InvoicesWithStaysEnding(search_date));
                }
            },
        }

        Ok(plan)
    }

    /// Returns a human-readable description of the plan.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "Build itineraries for delay {} ({})",
            self.delay, self.search_date
        )
    }

    /// Returns the number of invoice queries in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Checks if the plan has no queries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Adds a signed number of days to `date`.
fn offset_date(date: NaiveDate, delay: i64) -> Result<NaiveDate> {
    let days = Days::new(delay.unsigned_abs());
    let shifted = if delay >= 0 {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    };

    shifted.ok_or_else(|| Error::InvalidArgument {
        field: "delay".into(),
        reason: format!("{delay} days from {date} is outside the calendar"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 3, 10).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_positive_delay_searches_beginnings() {
        let plan = ItineraryPlan::for_delay(5, today(), SameDayPolicy::default()).unwrap();
        assert_eq!(plan.search_date, date("2019-03-15"));
        assert_eq!(
            plan.actions,
            vec![PlanAction::InvoicesWithStaysBeginning(date("2019-03-15"))]
        );
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_negative_delay_searches_endings() {
        let plan = ItineraryPlan::for_delay(-5, today(), SameDayPolicy::default()).unwrap();
        assert_eq!(plan.search_date, date("2019-03-05"));
        assert_eq!(
            plan.actions,
            vec![PlanAction::InvoicesWithStaysEnding(date("2019-03-05"))]
        );
    }

    #[test]
    fn test_zero_delay_repeats_ending_by_default() {
        let plan = ItineraryPlan::for_delay(0, today(), SameDayPolicy::default()).unwrap();
        assert_eq!(
            plan.actions,
            vec![
                PlanAction::InvoicesWithStaysEnding(today()),
                PlanAction::InvoicesWithStaysEnding(today()),
            ]
        );
        assert_eq!(plan.warnings.len(), 1);
    }

    #[test]
    fn test_zero_delay_beginning_and_ending() {
        let plan =
            ItineraryPlan::for_delay(0, today(), SameDayPolicy::BeginningAndEnding).unwrap();
        assert_eq!(
            plan.actions,
            vec![
                PlanAction::InvoicesWithStaysBeginning(today()),
                PlanAction::InvoicesWithStaysEnding(today()),
            ]
        );
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_policy_only_affects_zero_delay() {
        let repeat = ItineraryPlan::for_delay(3, today(), SameDayPolicy::RepeatEnding).unwrap();
        let both = ItineraryPlan::for_delay(3, today(), SameDayPolicy::BeginningAndEnding).unwrap();
        assert_eq!(repeat.actions, both.actions);
    }

    #[test]
    fn test_delay_outside_calendar() {
        let err = ItineraryPlan::for_delay(i64::MAX, today(), SameDayPolicy::default()).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = ItineraryPlan::for_delay(i64::MIN, today(), SameDayPolicy::default()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_action_descriptions() {
        let action = PlanAction::InvoicesWithStaysEnding(date("2019-03-05"));
        assert_eq!(action.description(), "Find invoices with stays ending 2019-03-05");
        assert_eq!(action.query(), Query::InvoicesWithStaysEnding(date("2019-03-05")));
    }

    #[test]
    fn test_policy_parse_and_display() {
        for policy in [SameDayPolicy::RepeatEnding, SameDayPolicy::BeginningAndEnding] {
            assert_eq!(SameDayPolicy::parse(&policy.to_string()).unwrap(), policy);
        }
        assert_eq!(
            SameDayPolicy::parse("Repeat-Ending").unwrap(),
            SameDayPolicy::RepeatEnding
        );
        assert!(SameDayPolicy::parse("both").is_err());
    }
}
