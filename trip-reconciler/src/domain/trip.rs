//! Trip snapshot entity.
//!
//! A `Trip` is one observation of a vehicle run calling at one stop, as
//! delivered by a polled departure feed. Because the feed is polled
//! repeatedly, several `Trip` values with the same logical identity but
//! different delay/cancellation data routinely coexist in one batch;
//! collapsing them is the job of the [`crate::reconcile`] module.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Line, Stop};

/// One observation of a trip calling at a stop.
///
/// Snapshots of the same physical trip differ mainly in `delay`,
/// `cancelled` and `when`; `trip_id` may also differ between polls
/// because the feed encodes a timestamp into it. The fields mirror the
/// feed's JSON shape (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Opaque feed identifier. Not unique across snapshots of the same trip.
    pub trip_id: String,
    /// Line and run this observation belongs to
    pub line: Line,
    /// Stop this observation was made at
    pub stop: Stop,
    /// Scheduled time of the stop event
    pub planned_when: Option<DateTime<Utc>>,
    /// Live/estimated time of the stop event
    pub when: Option<DateTime<Utc>>,
    /// When the poller ingested this snapshot
    pub created_at: DateTime<Utc>,
    /// Delay in seconds, positive = late. `None` when the feed reported
    /// no prognosis.
    pub delay: Option<i32>,
    /// Platform the stop event is expected on
    pub platform: Option<String>,
    /// Platform the stop event was scheduled on
    pub planned_platform: Option<String>,
    /// Whether this stop event is cancelled
    #[serde(default)]
    pub cancelled: bool,
}

impl Trip {
    /// Returns the date of this trip: planned time if present, else live
    /// time, else ingestion time.
    ///
    /// The fallback chain lives here and nowhere else; callers that need
    /// a date for an arbitrary snapshot must use this instead of reading
    /// `planned_when` directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use trip_reconciler::domain::{FahrtNr, Line, Product, Stop, StopId, Trip};
    ///
    /// let mut trip = Trip {
    ///     trip_id: "1|210101|0|80|6032024".into(),
    ///     line: Line::new(
    ///         FahrtNr::new("13023".into()).unwrap(),
    ///         "s-41".into(),
    ///         "S 41".into(),
    ///         Product::Suburban,
    ///     ),
    ///     stop: Stop::new(StopId(8089100), "Berlin Gesundbrunnen".into()),
    ///     planned_when: None,
    ///     when: None,
    ///     created_at: Utc.with_ymd_and_hms(2024, 3, 6, 12, 25, 0).unwrap(),
    ///     delay: None,
    ///     platform: None,
    ///     planned_platform: None,
    ///     cancelled: false,
    /// };
    ///
    /// // Only the ingestion time is known
    /// assert_eq!(trip.date(), trip.created_at);
    ///
    /// // A live estimate takes precedence over ingestion time
    /// trip.when = Some(Utc.with_ymd_and_hms(2024, 3, 6, 12, 33, 0).unwrap());
    /// assert_eq!(trip.date(), trip.when.unwrap());
    ///
    /// // The planned time beats both
    /// trip.planned_when = Some(Utc.with_ymd_and_hms(2024, 3, 6, 12, 30, 0).unwrap());
    /// assert_eq!(trip.date(), trip.planned_when.unwrap());
    /// ```
    pub fn date(&self) -> DateTime<Utc> {
        self.planned_when.or(self.when).unwrap_or(self.created_at)
    }

    /// Returns true if the feed reported a positive delay.
    pub fn is_delayed(&self) -> bool {
        self.delay.is_some_and(|d| d > 0)
    }

    /// Returns the delay as a duration, if delayed.
    pub fn delay_duration(&self) -> Option<Duration> {
        self.delay
            .filter(|d| *d > 0)
            .map(|d| Duration::seconds(i64::from(d)))
    }

    /// Returns this trip with its planned time replaced.
    pub fn with_planned_when(mut self, planned_when: Option<DateTime<Utc>>) -> Self {
        self.planned_when = planned_when;
        self
    }

    /// Returns this trip with its trip id replaced.
    pub fn with_trip_id(mut self, trip_id: String) -> Self {
        self.trip_id = trip_id;
        self
    }
}
