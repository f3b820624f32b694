//! Utility functions for CLI operations.
//!
//! This module provides configuration loading, database resolution, and
//! argument parsing helpers shared across commands.

use crate::error::CliError;
use chrono::NaiveDate;
use clap::ValueEnum;
use merlin::config::DatabaseSettings;
use merlin::database::{DatabaseConfig, SqliteRowSource, DATABASE_FILE};
use merlin::{Config, ConfigBuilder, Error as LibError};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Use this database file instead of the configured one.
    pub database: Option<PathBuf>,

    /// Override the database busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    if global.database.is_some() || global.busy_timeout.is_some() {
        builder = builder.with_config(Config {
            database: Some(DatabaseSettings {
                path: global.database.clone(),
                busy_timeout_ms: global.busy_timeout,
            }),
            ..Default::default()
        });
    }

    builder.build().map_err(|e| match e {
        LibError::Io(io) => CliError::Io(io),
        other => CliError::Config(other.to_string()),
    })
}

/// Resolve the database path.
///
/// Priority: configured path (including `--database`) > `--data-dir` >
/// `MERLIN_DATA_DIR` > `~/.merlin`.
pub fn resolve_database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(path) = config.database_path() {
        return Ok(path.clone());
    }

    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join(DATABASE_FILE));
    }

    merlin::database::resolve_database_path().map_err(|e| CliError::Config(e.to_string()))
}

/// Build the database configuration for the resolved path.
pub fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let path = resolve_database_path(global, config)?;
    Ok(DatabaseConfig::new(path)
        .with_busy_timeout(Duration::from_millis(config.busy_timeout_ms())))
}

/// Open a read-only row source over an existing database.
///
/// # Errors
///
/// Returns `NoDatabase` if the database file does not exist.
pub fn open_row_source(global: &GlobalOptions, config: &Config) -> Result<SqliteRowSource, CliError> {
    let db_config = database_config(global, config)?;

    if !db_config.path.exists() {
        return Err(CliError::NoDatabase(db_config.path));
    }

    log::debug!("Reading from {}", db_config.path.display());
    Ok(SqliteRowSource::new(db_config.read_only()))
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' (expected YYYY-MM-DD): {e}"))
}
