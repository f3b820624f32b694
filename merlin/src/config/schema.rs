//! Configuration schema definitions.
//!
//! This module defines the configuration structure for merlin: where the
//! reservation database lives and how same-day itinerary searches behave.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::operations::SameDayPolicy;

/// Default busy timeout for database connections, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered.
///
/// # Examples
///
/// ```
/// use merlin::config::{Config, DatabaseSettings};
/// use merlin::operations::SameDayPolicy;
///
/// let config: Config = serde_yaml::from_str(
///     "database:\n  busy_timeout_ms: 250\nsame_day_policy: beginning-and-ending\n",
/// ).unwrap();
///
/// assert_eq!(config.busy_timeout_ms(), 250);
/// assert_eq!(config.same_day_policy(), SameDayPolicy::BeginningAndEnding);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection settings.
    pub database: Option<DatabaseSettings>,

    /// How a delay of zero days is searched.
    pub same_day_policy: Option<SameDayPolicy>,
}

impl Config {
    /// Returns the configured database path, if any.
    #[must_use]
    pub fn database_path(&self) -> Option<&PathBuf> {
        self.database.as_ref().and_then(|db| db.path.as_ref())
    }

    /// Returns the busy timeout, falling back to the default.
    #[must_use]
    pub fn busy_timeout_ms(&self) -> u64 {
        self.database
            .as_ref()
            .and_then(|db| db.busy_timeout_ms)
            .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Returns the same-day policy, falling back to the default.
    #[must_use]
    pub fn same_day_policy(&self) -> SameDayPolicy {
        self.same_day_policy.unwrap_or_default()
    }
}

/// Database connection settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Path to the SQLite database file.
    pub path: Option<PathBuf>,

    /// How long a connection waits on a locked database, in milliseconds.
    pub busy_timeout_ms: Option<u64>,
}
