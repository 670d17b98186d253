//! Line (logical route) type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{FahrtNr, Product};

/// The line a trip runs on, together with the concrete run.
///
/// A line is a logical route ("S 41") that is served by many vehicle runs
/// over the day; `fahrt_nr` pins down the single run this trip record
/// belongs to. `line_id` is the feed's stable route identifier
/// (e.g. `"s-41"`), distinct from the human-readable `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Run identity, shared across all stops on one run
    pub fahrt_nr: FahrtNr,
    /// Stable route identifier (e.g. "s-41")
    pub line_id: String,
    /// Display name (e.g. "S 41")
    pub name: String,
    /// Transport mode/category
    pub product: Product,
}

impl Line {
    /// Creates a new line.
    pub fn new(fahrt_nr: FahrtNr, line_id: String, name: String, product: Product) -> Self {
        Self {
            fahrt_nr,
            line_id,
            name,
            product,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.fahrt_nr)
    }
}
