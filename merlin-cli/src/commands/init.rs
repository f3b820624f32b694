//! Init command implementation.
//!
//! This module implements the `init` command, which creates the database
//! file and its schema.

use crate::error::CliError;
use crate::utils::{database_config, load_configuration, GlobalOptions};
use clap::Parser;
use merlin::Database;
use std::fs;
use std::path::{Path, PathBuf};

/// Create the database and its schema.
#[derive(Parser)]
#[command(about = "Create the database and its schema")]
pub struct InitCommand {
    /// Remove an existing database before creating a new one
    #[arg(long)]
    overwrite: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db_config = database_config(global, &config)?;
        let path = db_config.path.clone();
        let exists = path.exists();

        if self.dry_run {
            if exists && !self.overwrite {
                println!("Database already exists at {}", path.display());
            } else {
                if exists {
                    println!("Would remove {}", path.display());
                }
                println!("Would create database at {}", path.display());
            }
            return Ok(());
        }

        if exists {
            if !self.overwrite {
                log::debug!("Database already exists at {}", path.display());
                if !global.quiet {
                    println!("Database already exists at {}", path.display());
                }
                // Opening still verifies the schema version.
                Database::open(db_config)?;
                return Ok(());
            }

            remove_database_files(&path)?;
            log::info!("Removed existing database at {}", path.display());
        }

        Database::open(db_config)?;

        if !global.quiet {
            println!("Created database at {}", path.display());
        }

        Ok(())
    }
}

/// Removes a database file and its WAL side files.
fn remove_database_files(path: &Path) -> Result<(), CliError> {
    fs::remove_file(path)?;

    for suffix in ["-wal", "-shm"] {
        let mut side = path.as_os_str().to_owned();
        side.push(suffix);
        let side = PathBuf::from(side);
        if side.exists() {
            fs::remove_file(&side)?;
        }
    }

    Ok(())
}
