//! Deterministic test harness for Wayfinder
//!
//! A [`RecordingHost`] implements the shell's host-UI trait with plain
//! bookkeeping instead of a toolkit: every imperative call is recorded as a
//! [`HostOp`], and the live overlay/stack counts the synchronization
//! protocol reads back are modeled exactly. Externally-driven UI changes —
//! the source of reconciliation traffic in production — are injected with
//! [`RecordingHost::simulate_back_gesture`] and
//! [`RecordingHost::simulate_modal_dismissal`].
//!
//! The `fixtures` module provides concrete item families and screen
//! factories with distinct concrete types, shared by tests across the
//! workspace.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
mod host;

pub use host::{HostOp, RecordingHost};
