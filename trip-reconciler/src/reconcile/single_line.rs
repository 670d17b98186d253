//! Single-line reconciliation.
//!
//! Deduplicates a batch of observations that already belong to one run
//! context. Identity is (fahrt number, stop id): polling the feed twice
//! yields two records for the same stop event, and only one may survive.

use tracing::{debug, trace};

use crate::domain::Trip;

/// Collapses repeated observations of the same stop event.
///
/// Two observations are duplicates when they share both fahrt number and
/// stop id; for each such group exactly one record is returned. The
/// returned record carries the highest delay reported by any removed
/// duplicate at that stop (its own trip id comes with it), while the
/// planned time is the one from the observation that survived the
/// duplicate pass.
///
/// Delay comparison treats a missing prognosis as lower than any reported
/// delay, and on equal delays the earliest removed observation wins.
/// Note that the delay pool is matched on stop id alone, not on the full
/// (fahrt number, stop id) key of the duplicate pass.
///
/// # Arguments
///
/// * `trips` - Observations in feed order, from one run context
///
/// # Returns
///
/// The batch with duplicates collapsed, in surviving-observation order.
/// A batch without duplicates is returned unchanged.
pub fn reconcile_single_line(trips: Vec<Trip>) -> Vec<Trip> {
    let mut marked = vec![false; trips.len()];
    for i in 0..trips.len() {
        for j in (i + 1)..trips.len() {
            if trips[i].line.fahrt_nr == trips[j].line.fahrt_nr
                && trips[i].stop.stop_id == trips[j].stop.stop_id
            {
                marked[j] = true;
            }
        }
    }

    if !marked.iter().any(|&m| m) {
        return trips;
    }

    let total = trips.len();
    let mut survivors = Vec::with_capacity(total);
    let mut removed = Vec::new();
    for (trip, is_duplicate) in trips.into_iter().zip(marked) {
        if is_duplicate {
            removed.push(trip);
        } else {
            survivors.push(trip);
        }
    }

    for survivor in &mut survivors {
        // Highest delay among removed duplicates at this stop; first one
        // wins a tie, and no prognosis loses to any reported delay.
        let winner = removed
            .iter()
            .filter(|t| t.stop.stop_id == survivor.stop.stop_id)
            .reduce(|best, t| if t.delay > best.delay { t } else { best });

        let Some(winner) = winner else { continue };

        trace!(
            fahrt_nr = %winner.line.fahrt_nr,
            stop_id = %winner.stop.stop_id,
            delay = winner.delay,
            "replacing survivor with best-delay duplicate"
        );
        *survivor = winner.clone().with_planned_when(survivor.planned_when);
    }

    debug!(
        input = total,
        removed = removed.len(),
        output = survivors.len(),
        "single-line reconciliation complete"
    );

    survivors
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{FahrtNr, Line, Product, Stop, StopId};
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn trip(fahrt_nr: &str, stop_id: i64, delay: Option<i32>, seq: usize) -> Trip {
        Trip {
            trip_id: format!("1|{seq}|0|80|6032024"),
            line: Line::new(
                FahrtNr::new(fahrt_nr.to_string()).unwrap(),
                "s-41".into(),
                "S 41".into(),
                Product::Suburban,
            ),
            stop: Stop::new(StopId(stop_id), format!("Stop {stop_id}")),
            planned_when: Some(Utc.with_ymd_and_hms(2024, 3, 6, 12, 30, 0).unwrap()),
            when: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap(),
            delay,
            platform: None,
            planned_platform: None,
            cancelled: false,
        }
    }

    fn opt_delay() -> impl Strategy<Value = Option<i32>> {
        proptest::option::of(-300i32..3600)
    }

    proptest! {
        /// A batch with pairwise-distinct stops never changes
        #[test]
        fn idempotent_on_distinct_stops(delays in proptest::collection::vec(opt_delay(), 0..8)) {
            let batch: Vec<Trip> = delays
                .iter()
                .enumerate()
                .map(|(i, &delay)| trip("S41", i as i64, delay, i))
                .collect();

            prop_assert_eq!(reconcile_single_line(batch.clone()), batch);
        }

        /// One record per (fahrt, stop) survives for single-run batches
        #[test]
        fn output_identity_is_unique(
            stops in proptest::collection::vec(0i64..4, 0..12),
            delays in proptest::collection::vec(opt_delay(), 12),
        ) {
            let batch: Vec<Trip> = stops
                .iter()
                .zip(&delays)
                .enumerate()
                .map(|(i, (&stop, &delay))| trip("S41", stop, delay, i))
                .collect();

            let result = reconcile_single_line(batch);

            let mut seen = std::collections::HashSet::new();
            for t in &result {
                prop_assert!(
                    seen.insert((t.line.fahrt_nr.clone(), t.stop.stop_id)),
                    "duplicate identity in output: {:?}", t
                );
            }
        }

        /// A single group keeps the maximum delay among removed duplicates,
        /// and the first observation's planned time
        #[test]
        fn single_group_selection(delays in proptest::collection::vec(opt_delay(), 2..8)) {
            let batch: Vec<Trip> = delays
                .iter()
                .enumerate()
                .map(|(i, &delay)| {
                    trip("S41", 42, delay, i)
                        .with_planned_when(Some(
                            Utc.with_ymd_and_hms(2024, 3, 6, 12, i as u32, 0).unwrap(),
                        ))
                })
                .collect();

            let expected_planned = batch[0].planned_when;
            let expected_delay = delays[1..].iter().copied().max().unwrap();

            let result = reconcile_single_line(batch);
            prop_assert_eq!(result.len(), 1);
            prop_assert_eq!(result[0].delay, expected_delay);
            prop_assert_eq!(result[0].planned_when, expected_planned);
        }

        /// Reconciling twice is the same as reconciling once for
        /// single-run batches
        #[test]
        fn reconcile_is_idempotent(
            stops in proptest::collection::vec(0i64..4, 0..12),
            delays in proptest::collection::vec(opt_delay(), 12),
        ) {
            let batch: Vec<Trip> = stops
                .iter()
                .zip(&delays)
                .enumerate()
                .map(|(i, (&stop, &delay))| trip("S41", stop, delay, i))
                .collect();

            let once = reconcile_single_line(batch);
            let twice = reconcile_single_line(once.clone());
            prop_assert_eq!(twice, once);
        }
    }
}
