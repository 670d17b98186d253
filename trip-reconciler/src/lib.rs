//! Trip reconciliation engine for repeatedly polled transit feeds.
//!
//! A live departure feed is polled on a schedule, so the same physical
//! trip-at-stop shows up many times with slightly different delay,
//! cancellation and timestamp data. This crate collapses such a batch of
//! snapshots into one canonical record per logical trip, keeping the
//! worst observed delay while preserving the planned time of the first
//! observation.
//!
//! Fetching the batch and storing the reconciled result are the caller's
//! concern; this crate is pure and does no I/O.

pub mod domain;
pub mod reconcile;
