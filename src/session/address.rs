//! Account address read from the page.

use std::fmt;

use crate::error::ClientError;

/// Non-empty account address a session subscribes to.
///
/// Immutable once the session has started.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Validates the raw `address` attribute.
    ///
    /// Surrounding whitespace is stripped before the address is used in the
    /// URL, so a whitespace-only attribute counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingAddress`] if the attribute is absent
    /// or blank.
    pub fn parse(raw: Option<&str>) -> Result<Self, ClientError> {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() => Ok(Self(value.to_owned())),
            _ => Err(ClientError::MissingAddress),
        }
    }

    /// Returns the address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
