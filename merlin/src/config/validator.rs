//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use merlin::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let config: Config = serde_yaml::from_str("database:\n  busy_timeout_ms: 0\n").unwrap();
/// assert!(ConfigValidator::validate(&config).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the busy timeout is zero or the database path
    /// is empty.
    pub fn validate(config: &Config) -> Result<()> {
        let Some(ref database) = config.database else {
            return Ok(());
        };

        if let Some(ref path) = database.path {
            if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
                return Err(Error::Configuration {
                    field: "database.path".into(),
                    message: "Cannot be empty".into(),
                });
            }
        }

        if database.busy_timeout_ms == Some(0) {
            return Err(Error::Configuration {
                field: "database.busy_timeout_ms".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        Ok(())
    }
}
