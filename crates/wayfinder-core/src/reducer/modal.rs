//! ShowModal / DismissModal: the overlay layer.

use crate::navigation::{Modal, Navigation};
use crate::screen::ScreenHandle;

use super::collapse_bare_modals;

/// Append a new overlay layer after collapsing trailing bare modals.
///
/// Duplicate-type suppression is a synchronization concern; asked twice,
/// this will happily build duplicate layers.
pub(super) fn show_modal(
    state: &Navigation,
    handle: Option<&ScreenHandle>,
    as_navigation_stack: bool,
) -> Navigation {
    let handle = handle.cloned().unwrap_or_else(|| state.active_handle());
    let mut modals = collapse_bare_modals(state.modals());
    modals.push(if as_navigation_stack {
        Modal::NavigationStack(vec![handle])
    } else {
        Modal::Single(handle)
    });
    Navigation::new(state.root().clone(), modals)
}

/// Remove the topmost overlay layer, or all of them. Identity when none is
/// up.
pub(super) fn dismiss_modal(state: &Navigation, dismiss_all: bool) -> Navigation {
    let mut modals = state.modals().to_vec();
    if dismiss_all {
        modals.clear();
    } else {
        modals.pop();
    }
    Navigation::new(state.root().clone(), modals)
}
