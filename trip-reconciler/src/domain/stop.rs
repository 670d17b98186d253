//! Stop types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable numeric identity of a physical stop.
///
/// The feed assigns every station/platform complex a numeric id (EVA
/// number). Unlike trip ids these are stable across polls, so they are
/// what reconciliation keys on.
///
/// # Examples
///
/// ```
/// use trip_reconciler::domain::StopId;
///
/// let id = StopId(8011160);
/// assert_eq!(id.to_string(), "8011160");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct StopId(pub i64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StopId {
    fn from(value: i64) -> Self {
        StopId(value)
    }
}

impl From<StopId> for i64 {
    fn from(value: StopId) -> Self {
        value.0
    }
}

/// A physical stop a trip calls at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Stable stop identity
    pub stop_id: StopId,
    /// Display name (e.g. "Berlin Hbf")
    pub name: String,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(stop_id: StopId, name: String) -> Self {
        Self { stop_id, name }
    }
}
