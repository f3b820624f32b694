//! Logging infrastructure for the merlin library.
//!
//! Library code emits records through the `log` facade. This module
//! provides the stderr backend installed by binaries, with a coarse
//! three-level verbosity switch.

use std::env;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::Local;
use log::{LevelFilter, Metadata, Record};

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "MERLIN_LOG_MODE";

const TIMESTAMP_FORMAT: &str = "%H:%M:%S %Y-%m-%d";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use merlin::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Errors, warnings, info, and debug records.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            2 => Self::Verbose,
            _ => Self::Normal,
        }
    }

    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use merlin::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// Returns the `log` filter this level maps to.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    /// Resolves the level from CLI flags and the environment.
    ///
    /// The priority order is:
    /// 1. CLI flags (`verbose` wins over `quiet`)
    /// 2. `MERLIN_LOG_MODE` environment variable
    /// 3. Default (Normal)
    #[must_use]
    pub fn resolve(verbose: bool, quiet: bool) -> Self {
        if verbose {
            return Self::Verbose;
        }
        if quiet {
            return Self::Quiet;
        }

        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|value| Self::parse(&value).ok())
            .unwrap_or_default()
    }
}

/// A stderr `log` backend.
///
/// Each record is written as `LEVEL HH:MM:SS YYYY-MM-DD: message`. The
/// level can be changed after the logger is installed.
#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
}

/// The backend installed by [`init_logger`].
static LOGGER: Logger = Logger::new(LogLevel::Normal);

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Returns the current log level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Changes the log level.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    fn format(record: &Record<'_>) -> String {
        format!(
            "{} {}: {}",
            record.level(),
            Local::now().format(TIMESTAMP_FORMAT),
            record.args()
        )
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level().filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Installs the stderr logger based on CLI flags and the environment.
///
/// See [`LogLevel::resolve`] for the priority order. The backend is
/// installed on the first call; later calls change its level.
///
/// # Examples
///
/// ```
/// use merlin::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// log::debug!("visible on stderr");
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = LogLevel::resolve(verbose, quiet);

    LOGGER.set_level(level);
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("logger already installed, updating level to {level}");
    }
    log::set_max_level(level.filter());

    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, test: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }

        test();

        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("QUIET").unwrap(), LogLevel::Quiet);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled_by_level() {
        let normal = Logger::default();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        let info = Metadata::builder().level(log::Level::Info).build();
        assert!(normal.enabled(&warn));
        assert!(!normal.enabled(&info));

        let quiet = Logger::new(LogLevel::Quiet);
        let error = Metadata::builder().level(log::Level::Error).build();
        assert!(!quiet.enabled(&error));
    }

    #[test]
    fn test_record_format() {
        let line = Logger::format(
            &Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("two queries"))
                .build(),
        );
        assert!(line.starts_with("WARN "));
        assert!(line.ends_with(": two queries"));
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        with_log_mode(None, || {
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_flags() {
        with_log_mode(None, || {
            assert_eq!(LogLevel::resolve(true, false), LogLevel::Verbose);
            assert_eq!(LogLevel::resolve(false, true), LogLevel::Quiet);
            assert_eq!(LogLevel::resolve(true, true), LogLevel::Verbose);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_from_env() {
        with_log_mode(Some("verbose"), || {
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Verbose);
            // CLI flag overrides env
            assert_eq!(LogLevel::resolve(false, true), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_env_invalid_fallback() {
        with_log_mode(Some("chatty"), || {
            assert_eq!(LogLevel::resolve(false, false), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_sets_max_level() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, true), LogLevel::Quiet);
            assert_eq!(log::max_level(), LevelFilter::Off);

            assert_eq!(init_logger(true, false), LogLevel::Verbose);
            assert_eq!(log::max_level(), LevelFilter::Debug);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_changes_installed_level() {
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();

        with_log_mode(None, || {
            init_logger(false, true);
            assert_eq!(LOGGER.level(), LogLevel::Quiet);
            assert!(!LOGGER.enabled(&warn));

            init_logger(true, false);
            assert_eq!(LOGGER.level(), LogLevel::Verbose);
            assert!(LOGGER.enabled(&debug));
        });
    }

    #[test]
    fn test_set_level() {
        let logger = Logger::default();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(!logger.enabled(&debug));

        logger.set_level(LogLevel::Verbose);
        assert_eq!(logger.level(), LogLevel::Verbose);
        assert!(logger.enabled(&debug));
    }
}
