//! Synchronization shell for Wayfinder
//!
//! The shell owns the single authoritative [`wayfinder_core::Navigation`]
//! value and keeps it consistent with an externally-owned imperative UI, in
//! both directions:
//!
//! - Dispatched actions pass per-action guards, go through the pure reducer,
//!   and then a continuation performs the matching imperative host calls so
//!   the live UI ends up structurally equal to the new declarative state.
//! - Externally-driven UI changes (a completed back gesture, a user-driven
//!   modal dismissal) are reported through life-cycle signal entry points,
//!   which synthesize reconciliation actions so the declarative model
//!   catches up. The feedback path is guard-checked and idempotent.
//!
//! All processing happens on one logical serialized context: a FIFO action
//! queue with a single-flight drain, so one action is fully processed
//! (guards, reduce, effect, observer notification) before the next begins,
//! and nested dispatches from effects or observers simply enqueue.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dispatch;
mod host;
mod observer;
mod protocol;
mod shell;

pub use config::{ConfigError, MAX_FAMILY_LEN, ShellConfig};
pub use dispatch::Dispatcher;
pub use host::{HostUi, RootTarget};
pub use observer::{FamilyObserver, NavigationObserver};
pub use shell::Shell;
