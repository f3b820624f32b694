//! Main entry point for the merlin CLI.
//!
//! Commands:
//! - `init`: Create the database and its schema
//! - `itineraries`: List itineraries for a delay in days
//! - `lock-combinations`: List lock combinations for a facility

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    merlin::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        database: cli.database,
        busy_timeout: cli.busy_timeout,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Itineraries(cmd) => cmd.execute(&global),
        cli::Command::LockCombinations(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
