//! Trip-id date fragment helper.
//!
//! Feed trip ids embed the service date as their last `|`-separated
//! segment, e.g. `1|210101|0|80|6032024`. This module builds that
//! segment so callers can assemble or match ids against the feed.

use chrono::{Datelike, NaiveDate};

/// Renders the date segment of a feed trip id.
///
/// The feed's convention is `{day}{month}{year}` where day and year are
/// unpadded but the month is always two digits. 6 March 2024 therefore
/// becomes `"6032024"`, not `"06032024"`. This asymmetry is the feed's,
/// not ours; ids built with any other padding will never match.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_reconciler::domain::date_fragment;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// assert_eq!(date_fragment(date), "6032024");
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert_eq!(date_fragment(date), "25122024");
/// ```
pub fn date_fragment(date: NaiveDate) -> String {
    format!("{}{:02}{}", date.day(), date.month(), date.year())
}
