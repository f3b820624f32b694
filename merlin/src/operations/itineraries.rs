//! Delay-driven itinerary orchestration.
//!
//! Given a signed number of days from today, the orchestrator plans which
//! stay-window queries to run, executes them one at a time through a
//! [`RowSource`], and assembles one [`Itinerary`] per invoice found.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::mapping::{row_to_invoice, rows_to_reservations};
use crate::source::{Query, RowSource};
use crate::{EmailAddress, Guest, Invoice, Itinerary, Reservation};

use super::plan::{ItineraryPlan, PlanAction, SameDayPolicy};

/// Builds itineraries from a row source.
///
/// # Examples
///
/// ```no_run
/// use merlin::database::{DatabaseConfig, SqliteRowSource};
/// use merlin::operations::{ItineraryOrchestrator, SameDayPolicy};
///
/// let source = SqliteRowSource::new(DatabaseConfig::new("/tmp/merlin.db"));
/// let itineraries = ItineraryOrchestrator::new(&source)
///     .with_same_day_policy(SameDayPolicy::BeginningAndEnding)
///     .build_for_delay(3)
///     .unwrap();
///
/// for itinerary in &itineraries {
///     println!("{}", itinerary.guest().email_address());
/// }
/// ```
pub struct ItineraryOrchestrator<'a, S: RowSource + ?Sized> {
    source: &'a S,
    today: NaiveDate,
    same_day_policy: SameDayPolicy,
}

impl<'a, S: RowSource + ?Sized> ItineraryOrchestrator<'a, S> {
    /// Creates an orchestrator that treats the local calendar date as today.
    #[must_use]
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            today: crate::visit::today(),
            same_day_policy: SameDayPolicy::default(),
        }
    }

    /// Overrides the date delays are counted from.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Sets how a delay of zero is searched.
    #[must_use]
    pub const fn with_same_day_policy(mut self, policy: SameDayPolicy) -> Self {
        self.same_day_policy = policy;
        self
    }

    /// Plans the queries for `delay` without running them.
    ///
    /// # Errors
    ///
    /// Returns an error if the target date is outside the calendar range.
    pub fn plan(&self, delay: i64) -> Result<ItineraryPlan> {
        ItineraryPlan::for_delay(delay, self.today, self.same_day_policy)
    }

    /// Plans and executes the queries for `delay`.
    ///
    /// # Errors
    ///
    /// Returns the first failure from planning, the row source or row
    /// mapping. No partial result is returned.
    pub fn build_for_delay(&self, delay: i64) -> Result<Vec<Itinerary>> {
        let plan = self.plan(delay)?;
        self.execute(&plan)
    }

    /// Executes a plan.
    ///
    /// Invoice queries run in plan order and their results are concatenated
    /// without deduplication; each invoice then has its stay rows fetched
    /// and grouped into reservations.
    ///
    /// # Errors
    ///
    /// Returns the first failure from the row source or row mapping, with
    /// the query in flight recorded in the error.
    pub fn execute(&self, plan: &ItineraryPlan) -> Result<Vec<Itinerary>> {
        log::debug!("{}", plan.description());
        for warning in &plan.warnings {
            log::warn!("{warning}");
        }

        let mut invoices: Vec<(Query, Invoice)> = Vec::new();
        for action in &plan.actions {
            let query = action.query();
            for invoice in self.fetch_invoices(action)? {
                invoices.push((query.clone(), invoice));
            }
        }

        invoices
            .into_iter()
            .map(|(query, invoice)| self.assemble(&query, &invoice))
            .collect()
    }

    fn fetch_invoices(&self, action: &PlanAction) -> Result<Vec<Invoice>> {
        let query = action.query();
        let rows = match *action {
            PlanAction::InvoicesWithStaysBeginning(date) => {
                self.source.invoices_with_stays_beginning(date)
            }
            PlanAction::InvoicesWithStaysEnding(date) => {
                self.source.invoices_with_stays_ending(date)
            }
        }
        .inspect_err(|e| log::error!("Failed to get {query}: {e}"))?;

        let invoices = rows
            .iter()
            .map(row_to_invoice)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.within(&query))?;

        log::info!(
            "{} found: {}",
            capitalize(&query.to_string()),
            invoices
                .iter()
                .map(|invoice| format!(
                    "#{} ({})",
                    invoice.id(),
                    invoice.contact_email_address()
                ))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(invoices)
    }

    fn fetch_reservations(&self, invoice: &Invoice) -> Result<Vec<Reservation>> {
        let query = Query::ItineraryForInvoice(invoice.id());
        let rows = self
            .source
            .itinerary_for_invoice(invoice.id())
            .inspect_err(|e| log::error!("Failed to get {query}: {e}"))?;

        let reservations = rows_to_reservations(&rows).map_err(|e| e.within(&query))?;
        log::debug!(
            "Invoice #{} has {} reservation(s) across {} stay row(s)",
            invoice.id(),
            reservations.len(),
            rows.len()
        );

        Ok(reservations)
    }

    fn assemble(&self, query: &Query, invoice: &Invoice) -> Result<Itinerary> {
        let email =
            EmailAddress::new(invoice.contact_email_address()).map_err(|e| Error::MalformedRow {
                query: format!("{query} (invoice {})", invoice.id()),
                column: "contact_email_address".into(),
                reason: e.message,
            })?;

        let reservations = self.fetch_reservations(invoice)?;
        Ok(Itinerary::new(Guest::new(email), reservations))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the itineraries for `delay` days from today with default settings.
///
/// # Errors
///
/// Returns the first failure from the row source or row mapping.
pub fn build_itineraries_for_delay<S: RowSource + ?Sized>(
    source: &S,
    delay: i64,
) -> Result<Vec<Itinerary>> {
    ItineraryOrchestrator::new(source).build_for_delay(delay)
}
