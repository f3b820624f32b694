//! CLI structure and command definitions.

use crate::commands::{InitCommand, ItinerariesCommand, LockCombinationsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for assembling guest itineraries.
#[derive(Parser)]
#[command(name = "merlin")]
#[command(version, about = "Assemble guest itineraries from reservation data", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MERLIN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Use this database file instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub database: Option<PathBuf>,

    /// Override the database busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLISECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the database and its schema
    Init(InitCommand),

    /// List itineraries for stays beginning or ending a number of days from today
    Itineraries(ItinerariesCommand),

    /// List the lock combinations valid for a facility on a date
    LockCombinations(LockCombinationsCommand),
}
