//! Lock-combinations command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_row_source, parse_date, GlobalOptions, OutputFormat};
use chrono::NaiveDate;
use clap::Args;
use merlin::operations::get_lock_combinations;
use merlin::LockCombination;
use serde_json::json;
use std::io::{self, Write};

/// List the lock combinations valid for a facility on a date.
#[derive(Args)]
pub struct LockCombinationsCommand {
    /// Facility code
    #[arg(long)]
    pub facility: String,

    /// Stay date (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Exit with status 1 when no combinations are found
    #[arg(long)]
    pub fail_if_empty: bool,
}

impl LockCombinationsCommand {
    /// Execute the lock-combinations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let source = open_row_source(global, &config)?;
        let date = self.date.unwrap_or_else(merlin::visit::today);

        let combinations = get_lock_combinations(&source, &self.facility, date)?;

        if combinations.is_empty() && self.fail_if_empty {
            return Err(CliError::EmptyResult(format!(
                "No lock combinations found for {} on {date}",
                self.facility
            )));
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Table => {
                if !combinations.is_empty() {
                    writeln!(out, "COMBINATION\tVALID FROM\tVALID TO")?;
                }
                for c in &combinations {
                    writeln!(out, "{}\t{}\t{}", c.value(), c.valid_from(), c.valid_to())?;
                }
            }
            OutputFormat::Json => {
                let values: Vec<_> = combinations.iter().map(to_json).collect();
                serde_json::to_writer_pretty(&mut out, &values)?;
                writeln!(out)?;
            }
            OutputFormat::Csv => {
                let mut writer = csv::WriterBuilder::new().from_writer(&mut out);
                writer.write_record(["combination", "valid_from", "valid_to"])?;
                for c in &combinations {
                    writer.write_record([
                        c.value().to_string(),
                        c.valid_from().to_string(),
                        c.valid_to().to_string(),
                    ])?;
                }
                writer.flush()?;
            }
        }
        out.flush()?;

        Ok(())
    }
}

fn to_json(combination: &LockCombination) -> serde_json::Value {
    json!({
        "combination": combination.value(),
        "valid_from": combination.valid_from(),
        "valid_to": combination.valid_to(),
    })
}
