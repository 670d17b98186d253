//! Trip reconciliation.
//!
//! This module collapses a batch of repeated trip observations into one
//! canonical record per logical trip. Two identity definitions exist
//! because callers assemble batches in two shapes:
//!
//! - [`reconcile_single_line`] for batches drawn from one run context,
//!   keyed by (fahrt number, stop);
//! - [`reconcile_multi_line`] for batches mixing several lines at a stop,
//!   keyed by (fahrt number, planned time) so that distinct stop visits
//!   of the same run are not collapsed.
//!
//! Both keep the worst observed delay for a group while retaining the
//! planned time of the observation that survived the duplicate pass.

mod multi_line;
mod single_line;

pub use multi_line::reconcile_multi_line;
pub use single_line::reconcile_single_line;
