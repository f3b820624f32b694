//! Bookable facilities.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A bookable facility, such as a clubhouse or hut.
///
/// Two facilities are equal only when both the code and the name match.
/// Facilities are used as grouping keys when stay rows are assembled into
/// reservations.
///
/// # Examples
///
/// ```
/// use merlin::Facility;
///
/// let facility = Facility::new("CH", "Canmore Clubhouse").unwrap();
/// assert_eq!(facility.code(), "CH");
/// assert_eq!(format!("{facility}"), "CH (Canmore Clubhouse)");
///
/// assert!(Facility::new("  ", "Nameless").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Facility {
    code: String,
    name: String,
}

impl Facility {
    /// Creates a facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or only whitespace.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(ValidationError::new(
                "facility_code",
                "facility code must be non-empty",
            ));
        }

        Ok(Self {
            code,
            name: name.into(),
        })
    }

    /// Returns the short facility code used for lock lookups.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}
