//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use merlin::config::{Config, ConfigMerger};
/// use merlin::operations::SameDayPolicy;
///
/// let low = Config::default();
/// let high = Config {
///     same_day_policy: Some(SameDayPolicy::BeginningAndEnding),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.same_day_policy, Some(SameDayPolicy::BeginningAndEnding));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Simple fields are overwritten when set in `source`; the database
    /// section is merged field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.same_day_policy.is_some() {
            target.same_day_policy = source.same_day_policy;
        }

        if let Some(ref source_db) = source.database {
            target.database = Some(match &target.database {
                Some(target_db) => Self::merge_database(target_db, source_db),
                None => source_db.clone(),
            });
        }
    }

    fn merge_database(target: &DatabaseSettings, source: &DatabaseSettings) -> DatabaseSettings {
        DatabaseSettings {
            path: source.path.clone().or_else(|| target.path.clone()),
            busy_timeout_ms: source.busy_timeout_ms.or(target.busy_timeout_ms),
        }
    }
}
