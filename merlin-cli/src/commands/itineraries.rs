//! Itineraries command implementation.
//!
//! Lists the itineraries for stays beginning (positive delay) or ending
//! (negative delay) a number of days from today.

use crate::error::CliError;
use crate::utils::{load_configuration, open_row_source, parse_date, GlobalOptions, OutputFormat};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use merlin::operations::{ItineraryOrchestrator, SameDayPolicy};
use merlin::{Error as LibError, Itinerary, Reservation};
use serde_json::json;
use std::io::{self, Write};

/// Same-day policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Run the stays-ending query twice
    RepeatEnding,
    /// Run one stays-beginning and one stays-ending query
    BeginningAndEnding,
}

impl From<PolicyArg> for SameDayPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::RepeatEnding => SameDayPolicy::RepeatEnding,
            PolicyArg::BeginningAndEnding => SameDayPolicy::BeginningAndEnding,
        }
    }
}

/// List itineraries for a delay in days.
#[derive(Args)]
pub struct ItinerariesCommand {
    /// Days from today: positive finds arrivals, negative finds departures
    #[arg(long, allow_negative_numbers = true)]
    pub delay: i64,

    /// Count the delay from this date instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// How a delay of zero is searched
    #[arg(long, value_enum)]
    pub same_day_policy: Option<PolicyArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Exit with status 1 when no itineraries are found
    #[arg(long)]
    pub fail_if_empty: bool,
}

impl ItinerariesCommand {
    /// Execute the itineraries command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let source = open_row_source(global, &config)?;

        let policy = self
            .same_day_policy
            .map_or_else(|| config.same_day_policy(), SameDayPolicy::from);

        let mut orchestrator =
            ItineraryOrchestrator::new(&source).with_same_day_policy(policy);
        if let Some(today) = self.today {
            orchestrator = orchestrator.with_today(today);
        }

        let plan = orchestrator.plan(self.delay).map_err(|e| match e {
            LibError::InvalidArgument { reason, .. } => {
                CliError::InvalidArguments(format!("--delay {}: {reason}", self.delay))
            }
            other => CliError::Library(other),
        })?;
        let itineraries = orchestrator.execute(&plan)?;

        if itineraries.is_empty() && self.fail_if_empty {
            return Err(CliError::EmptyResult(format!(
                "No itineraries found for {}",
                plan.search_date
            )));
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Table => write_table(&mut out, &itineraries)?,
            OutputFormat::Json => write_json(&mut out, &itineraries)?,
            OutputFormat::Csv => write_csv(&mut out, &itineraries)?,
        }
        out.flush()?;

        Ok(())
    }
}

/// One flattened output line per itinerary.
struct Summary {
    guest: String,
    check_in: String,
    check_out: String,
    facilities: String,
    group_sizes: String,
    continuous: bool,
    congruent: bool,
}

impl Summary {
    fn of(itinerary: &Itinerary) -> Self {
        let reservations = itinerary.reservations();
        Self {
            guest: itinerary.guest().email_address().to_string(),
            check_in: optional_date(itinerary.check_in_date()),
            check_out: optional_date(itinerary.check_out_date()),
            facilities: itinerary
                .facilities()
                .map(|f| f.code().to_string())
                .collect::<Vec<_>>()
                .join(","),
            group_sizes: reservations
                .iter()
                .map(|r| format_sizes(&r.group_sizes()))
                .collect::<Vec<_>>()
                .join(";"),
            continuous: reservations.iter().all(Reservation::is_continuous),
            congruent: reservations.iter().all(Reservation::is_congruent),
        }
    }
}

fn optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn format_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

fn write_table(out: &mut impl Write, itineraries: &[Itinerary]) -> Result<(), CliError> {
    if itineraries.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "GUEST\tCHECK-IN\tCHECK-OUT\tFACILITIES\tGROUP SIZES\tCONTINUOUS\tCONGRUENT"
    )?;
    for itinerary in itineraries {
        let s = Summary::of(itinerary);
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            s.guest,
            s.check_in,
            s.check_out,
            s.facilities,
            s.group_sizes,
            yes_no(s.continuous),
            yes_no(s.congruent)
        )?;
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn write_json(out: &mut impl Write, itineraries: &[Itinerary]) -> Result<(), CliError> {
    let values: Vec<_> = itineraries
        .iter()
        .map(|itinerary| {
            json!({
                "guest": itinerary.guest().email_address().as_str(),
                "check_in": itinerary.check_in_date(),
                "check_out": itinerary.check_out_date(),
                "reservations": itinerary
                    .reservations()
                    .iter()
                    .map(|r| json!({
                        "facility_code": r.facility().code(),
                        "facility_name": r.facility().name(),
                        "first_night": r.first_night(),
                        "departure": r.departure_date(),
                        "nights": r.number_of_nights(),
                        "group_sizes": r.group_sizes(),
                        "continuous": r.is_continuous(),
                        "congruent": r.is_congruent(),
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &values)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(out: &mut impl Write, itineraries: &[Itinerary]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    writer.write_record([
        "guest",
        "check_in",
        "check_out",
        "facilities",
        "group_sizes",
        "continuous",
        "congruent",
    ])?;

    for itinerary in itineraries {
        let s = Summary::of(itinerary);
        writer.write_record([
            s.guest,
            s.check_in,
            s.check_out,
            s.facilities,
            s.group_sizes,
            s.continuous.to_string(),
            s.congruent.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
