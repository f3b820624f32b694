//! Guests and their contact addresses.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;

/// A validated email address.
///
/// The address is trimmed and must contain exactly one `@` with a
/// non-empty local part, a domain containing a dot, and no whitespace.
///
/// # Examples
///
/// ```
/// use merlin::EmailAddress;
///
/// let email = EmailAddress::new(" guest@example.com ").unwrap();
/// assert_eq!(email.as_str(), "guest@example.com");
///
/// assert!(EmailAddress::new("not-an-address").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validates and wraps an email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is not shaped like `local@domain.tld`.
    pub fn new(address: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = address.as_ref().trim();
        let invalid = |message: &str| ValidationError::new("email_address", message);

        if trimmed.is_empty() {
            return Err(invalid("email address must be non-empty"));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(invalid("email address must not contain whitespace"));
        }

        let (local, domain) = trimmed
            .split_once('@')
            .ok_or_else(|| invalid("email address must contain '@'"))?;

        if local.is_empty() || domain.contains('@') {
            return Err(invalid("email address must have exactly one local part"));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid("email address must have a qualified domain"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The person an itinerary is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guest {
    email_address: EmailAddress,
}

impl Guest {
    /// Creates a guest reachable at `email_address`.
    #[must_use]
    pub const fn new(email_address: EmailAddress) -> Self {
        Self { email_address }
    }

    /// Returns the guest's contact address.
    #[must_use]
    pub const fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }
}
