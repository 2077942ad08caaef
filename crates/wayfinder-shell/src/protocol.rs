//! Per-action synchronization contract.
//!
//! Two halves, both keyed on the action kind:
//!
//! - [`admit`]: pre-dispatch guards evaluated against the pre-dispatch state
//!   and the live UI. A refused action never reaches the reducer, performs
//!   no effect and notifies nobody — suppression, not an error.
//! - [`run_effect`]: the continuation run strictly after the reducer has
//!   produced the new state. It issues the imperative host calls that make
//!   the live UI structurally match the new declarative value, deriving
//!   implicit dismissal counts from the difference between live layer counts
//!   and what the new state asserts should exist.

use tracing::{debug, warn};
use wayfinder_core::{Modal, NavAction, Navigation, SyncKind};

use crate::host::{HostUi, RootTarget};

/// Decide whether `action` may proceed.
pub(crate) fn admit<H: HostUi>(action: &NavAction, state: &Navigation, host: &H) -> bool {
    match action {
        NavAction::Push { .. } | NavAction::ShowOnRoot { .. } => true,

        // A pop must leave one entry behind.
        NavAction::Pop { .. } => state.top_stack().len() > 1,

        // Re-selecting the current item changes nothing.
        NavAction::Show { item, .. } => state.root().current_item() != item,

        // Refuse to stack a modal of the screen type already showing,
        // unless the caller explicitly asked to present over itself.
        NavAction::ShowModal { handle, over_self, .. } => {
            if *over_self {
                return true;
            }
            let incoming = handle.clone().unwrap_or_else(|| state.active_handle());
            match state.modals().last().and_then(Modal::handle) {
                Some(visible) => !visible.same_screen_type(&incoming),
                None => true,
            }
        }

        // Nothing live to dismiss.
        NavAction::DismissModal { .. } => host.overlay_count() > 0,

        // Reconciliation fires only while the declarative model is ahead of
        // the live UI; equality means the previous pass already caught up.
        NavAction::SynchronizeState { kind: SyncKind::Navigation } => {
            state.top_stack().len() > host.visible_stack_len()
        }
        NavAction::SynchronizeState { kind: SyncKind::Modal } => {
            state.modals().len() > host.overlay_count()
        }
    }
}

/// Make the live UI match `new`.
pub(crate) fn run_effect<H: HostUi>(
    action: &NavAction,
    old: &Navigation,
    new: &Navigation,
    host: &mut H,
) {
    match action {
        NavAction::Push { pop, animated, .. } => {
            dismiss_excess_overlays(host, new.modals().len(), *animated);

            let target = new.top_stack();
            let Some(top) = target.last() else { return };
            let keep = target.len() - 1;
            let live = host.visible_stack_len();
            if pop.is_some() || live > keep {
                if live > keep + 1 {
                    warn!(live, keep, "live stack deeper than declared; replacing surplus");
                }
                host.replace_top_screens(live.saturating_sub(keep), top, *animated);
            } else {
                host.push_screen(top, *animated);
            }
        }

        NavAction::Pop { animated, .. } => {
            let drop_count = host.visible_stack_len().saturating_sub(new.top_stack().len());
            if drop_count > 0 {
                host.pop_screens(drop_count, *animated);
            }
        }

        NavAction::Show { item, animated, chrome_hidden, .. } => {
            // Root context changed: every overlay goes first (the new state
            // asserts zero), then the container is installed or re-selected
            // and an empty live region is seeded.
            dismiss_excess_overlays(host, new.modals().len(), *animated);
            if old.root().family() == new.root().family() {
                host.select_item(item);
            } else {
                let target = RootTarget::Family {
                    items: new.root().family(),
                    current: item.clone(),
                };
                host.set_root(&target, *animated, *chrome_hidden);
            }
            seed_visible_stack(new, host);
        }

        NavAction::ShowOnRoot { animated, chrome_hidden, .. } => {
            dismiss_excess_overlays(host, new.modals().len(), *animated);
            if let Some(top) = new.top_stack().last() {
                host.set_root(&RootTarget::Screen(top.clone()), *animated, *chrome_hidden);
            }
        }

        NavAction::ShowModal { as_navigation_stack, animated, .. } => {
            // The top declared layer is about to be presented, so the live
            // UI must first come down to everything beneath it.
            let asserted_below = new.modals().len().saturating_sub(1);
            dismiss_excess_overlays(host, asserted_below, *animated);

            if let Some(handle) = new.modals().last().and_then(Modal::handle) {
                host.present_overlay(handle, *as_navigation_stack, *animated);
            }
        }

        NavAction::DismissModal { dismiss_all, animated } => {
            let count = if *dismiss_all { host.overlay_count() } else { 1 };
            if count > 0 {
                host.dismiss_overlays(count, *animated);
            }
        }

        // The UI already moved on its own; the reducer has caught the model
        // up and there is nothing imperative left to do.
        NavAction::SynchronizeState { kind } => {
            debug!(?kind, "declarative model reconciled with live UI");
        }
    }
}

/// Dismiss live overlay layers down to the count the new state asserts.
fn dismiss_excess_overlays<H: HostUi>(host: &mut H, asserted: usize, animated: bool) {
    let excess = host.overlay_count().saturating_sub(asserted);
    if excess > 0 {
        host.dismiss_overlays(excess, animated);
    }
}

/// Populate an empty live region with the declared stack (container just
/// installed, or a never-visited tab selected).
fn seed_visible_stack<H: HostUi>(new: &Navigation, host: &mut H) {
    if host.visible_stack_len() > 0 {
        return;
    }
    for handle in new.top_stack() {
        host.push_screen(handle, false);
    }
}
