//! Fahrt number (vehicle run identity) type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when parsing an invalid fahrt number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fahrt number: {reason}")]
pub struct InvalidFahrtNr {
    reason: &'static str,
}

/// The number of one scheduled vehicle run.
///
/// A fahrt number identifies a single run of a vehicle and is shared by
/// every stop event on that run; it is the feed's finest-grained trip
/// identity short of the opaque trip id. The feed sends it as a string
/// (usually digits, e.g. `"13023"`, but some operators use alphanumeric
/// runs), so the only validation is that it must be non-empty.
///
/// # Examples
///
/// ```
/// use trip_reconciler::domain::FahrtNr;
///
/// let nr = FahrtNr::new("13023".to_string()).unwrap();
/// assert_eq!(nr.as_str(), "13023");
///
/// // Empty strings are rejected
/// assert!(FahrtNr::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FahrtNr(String);

impl FahrtNr {
    /// Create a new fahrt number from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidFahrtNr> {
        if s.is_empty() {
            return Err(InvalidFahrtNr {
                reason: "fahrt number cannot be empty",
            });
        }
        Ok(FahrtNr(s))
    }

    /// Returns the fahrt number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the FahrtNr and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for FahrtNr {
    type Error = InvalidFahrtNr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        FahrtNr::new(s)
    }
}

impl From<FahrtNr> for String {
    fn from(nr: FahrtNr) -> Self {
        nr.0
    }
}

impl fmt::Debug for FahrtNr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FahrtNr({})", self.0)
    }
}

impl fmt::Display for FahrtNr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
