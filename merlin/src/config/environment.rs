//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `MERLIN_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::operations::SameDayPolicy;
use std::env;
use std::path::PathBuf;

/// Overrides the database path.
pub const DATABASE_PATH_ENV: &str = "MERLIN_DATABASE_PATH";

/// Overrides the connection busy timeout, in milliseconds.
pub const BUSY_TIMEOUT_ENV: &str = "MERLIN_BUSY_TIMEOUT_MS";

/// Overrides the same-day search policy.
pub const SAME_DAY_POLICY_ENV: &str = "MERLIN_SAME_DAY_POLICY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use merlin::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric timeout or an unknown policy).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(path) = env::var(DATABASE_PATH_ENV) {
            let database = config.database.get_or_insert_with(Default::default);
            database.path = Some(PathBuf::from(path));
        }

        if let Ok(timeout) = env::var(BUSY_TIMEOUT_ENV) {
            let timeout = timeout.trim().parse().map_err(|_| Error::Configuration {
                field: BUSY_TIMEOUT_ENV.into(),
                message: format!("Must be a non-negative integer, got '{timeout}'"),
            })?;
            let database = config.database.get_or_insert_with(Default::default);
            database.busy_timeout_ms = Some(timeout);
        }

        if let Ok(policy) = env::var(SAME_DAY_POLICY_ENV) {
            let policy = SameDayPolicy::parse(&policy).map_err(|e| Error::Configuration {
                field: SAME_DAY_POLICY_ENV.into(),
                message: e.to_string(),
            })?;
            config.same_day_policy = Some(policy);
        }

        Ok(())
    }
}
