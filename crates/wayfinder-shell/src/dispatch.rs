//! Reentrant dispatch queue.
//!
//! Dispatches are serialized through an explicit FIFO queue with a
//! single-flight drain flag: the first dispatcher to arrive drains the queue
//! to completion; a dispatch made while a drain is running (from an effect,
//! an observer, or the host) enqueues and returns immediately, and the outer
//! drain picks it up. This guarantees one action is fully processed before
//! the next begins.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wayfinder_core::NavAction;

#[derive(Debug, Default)]
struct QueueState {
    pending: VecDeque<NavAction>,
    draining: bool,
}

/// Cloneable handle for enqueuing actions.
///
/// Effects, observers and the host hold clones of the shell's dispatcher;
/// enqueuing never blocks on processing. Actions enqueued while no drain is
/// running are processed at the owning shell's next
/// [`crate::Shell::dispatch`] or [`crate::Shell::pump`].
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    state: Arc<Mutex<QueueState>>,
}

impl Dispatcher {
    /// Enqueue an action.
    pub fn dispatch(&self, action: NavAction) {
        self.locked().pending.push_back(action);
    }

    /// Number of actions waiting to be processed.
    pub fn pending_len(&self) -> usize {
        self.locked().pending.len()
    }

    /// Claim the single drain slot. Returns `false` if a drain is already
    /// running, in which case the caller must not process.
    pub(crate) fn begin_drain(&self) -> bool {
        let mut state = self.locked();
        if state.draining {
            false
        } else {
            state.draining = true;
            true
        }
    }

    /// Next action to process, if any.
    pub(crate) fn next(&self) -> Option<NavAction> {
        self.locked().pending.pop_front()
    }

    /// Release the drain slot.
    pub(crate) fn end_drain(&self) {
        self.locked().draining = false;
    }

    // Mutex poisoning cannot leave the queue in a broken state (all
    // mutations are single assignments), so a poisoned lock is recovered.
    fn locked(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let dispatcher = Dispatcher::default();
        dispatcher.dispatch(NavAction::pop());
        dispatcher.dispatch(NavAction::dismiss_modal());
        assert!(matches!(dispatcher.next(), Some(NavAction::Pop { .. })));
        assert!(matches!(dispatcher.next(), Some(NavAction::DismissModal { .. })));
        assert!(dispatcher.next().is_none());
    }

    #[test]
    fn only_one_drain_runs_at_a_time() {
        let dispatcher = Dispatcher::default();
        assert!(dispatcher.begin_drain());
        assert!(!dispatcher.begin_drain());
        dispatcher.end_drain();
        assert!(dispatcher.begin_drain());
    }

    #[test]
    fn clones_share_the_queue() {
        let dispatcher = Dispatcher::default();
        let clone = dispatcher.clone();
        clone.dispatch(NavAction::pop());
        assert_eq!(dispatcher.pending_len(), 1);
        assert!(dispatcher.next().is_some());
        assert_eq!(clone.pending_len(), 0);
    }
}
