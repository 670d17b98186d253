//! Multi-line reconciliation.
//!
//! Deduplicates a batch that mixes observations from several lines, as a
//! stop-scoped query produces. Identity is (fahrt number, planned time)
//! rather than (fahrt number, stop id): one run legitimately visits many
//! stops, so keying on the stop would merge distinct stop events, while
//! two observations of the same run at the same planned time can only be
//! snapshots of one stop event.

use tracing::{debug, trace};

use crate::domain::Trip;

/// Collapses repeated observations across several lines.
///
/// Two observations are duplicates when they share fahrt number and
/// planned time (two absent planned times compare equal). For each group
/// one record survives, rewritten like in
/// [`reconcile_single_line`](super::reconcile_single_line): it takes the
/// highest delay among removed duplicates, keeps that winner's trip id,
/// and the planned time of the surviving observation. The delay pool
/// here is matched on (stop id, line id), so each line's observations at
/// a stop are reconciled against their own line only.
///
/// # Arguments
///
/// * `trips` - Observations in feed order, possibly spanning many lines
///
/// # Returns
///
/// The batch with duplicates collapsed, in surviving-observation order.
/// A batch without duplicates is returned unchanged.
pub fn reconcile_multi_line(trips: Vec<Trip>) -> Vec<Trip> {
    let mut marked = vec![false; trips.len()];
    for i in 0..trips.len() {
        for j in (i + 1)..trips.len() {
            if trips[i].line.fahrt_nr == trips[j].line.fahrt_nr
                && trips[i].planned_when == trips[j].planned_when
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
        // Highest delay among removed duplicates at this stop on this
        // line; first one wins a tie, no prognosis loses to any delay.
        let winner = removed
            .iter()
            .filter(|t| {
                t.stop.stop_id == survivor.stop.stop_id
                    && t.line.line_id == survivor.line.line_id
            })
            .reduce(|best, t| if t.delay > best.delay { t } else { best });

        let Some(winner) = winner else { continue };

        trace!(
            fahrt_nr = %winner.line.fahrt_nr,
            line_id = %winner.line.line_id,
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
        "multi-line reconciliation complete"
    );

    survivors
}
