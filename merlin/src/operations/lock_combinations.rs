//! Lock combination lookup.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::mapping::row_to_lock_combination;
use crate::source::{Query, RowSource};
use crate::LockCombination;

/// Returns the lock combinations valid for `facility_code` on `date`.
///
/// # Errors
///
/// Returns an error if the facility code is blank, the row source fails,
/// or a returned row cannot be mapped.
///
/// # Examples
///
/// ```no_run
/// use chrono::NaiveDate;
/// use merlin::database::{DatabaseConfig, SqliteRowSource};
/// use merlin::operations::get_lock_combinations;
///
/// let source = SqliteRowSource::new(DatabaseConfig::new("/tmp/merlin.db"));
/// let date = NaiveDate::from_ymd_opt(2019, 3, 3).unwrap();
/// for combination in get_lock_combinations(&source, "CH", date).unwrap() {
///     println!("{} until {}", combination.value(), combination.valid_to());
/// }
/// ```
pub fn get_lock_combinations<S: RowSource + ?Sized>(
    source: &S,
    facility_code: &str,
    date: NaiveDate,
) -> Result<Vec<LockCombination>> {
    if facility_code.trim().is_empty() {
        return Err(Error::InvalidArgument {
            field: "facility_code".into(),
            reason: "facility code must be non-empty".into(),
        });
    }

    let query = Query::LockCombinationsForStay {
        facility_code: facility_code.to_string(),
        date,
    };

    let rows = source
        .lock_combinations_for_stay(facility_code, date)
        .inspect_err(|e| log::error!("Failed to get {query}: {e}"))?;

    let combinations = rows
        .iter()
        .map(row_to_lock_combination)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| e.within(&query))?;

    log::debug!("Found {} {query}", combinations.len());
    Ok(combinations)
}
