//! Show / ShowOnRoot: select a root item or reset the root wholesale.

use crate::item::AnyNavigationItem;
use crate::navigation::{Navigation, Root};
use crate::screen::ScreenHandle;

/// Make `item` current, clearing every modal.
///
/// Within the same navigation family existing stacks are preserved; only an
/// empty target stack is seeded with the handle. A different family rebuilds
/// every entry fresh, seeding only the target.
pub(super) fn show(
    state: &Navigation,
    item: &AnyNavigationItem,
    handle: Option<&ScreenHandle>,
) -> Navigation {
    let handle = handle.cloned().unwrap_or_else(|| state.active_handle());
    let family = item.family();

    let entries = if family == state.root().family() {
        state
            .root()
            .entries()
            .iter()
            .map(|(entry_item, stack)| {
                if entry_item == item && stack.is_empty() {
                    (entry_item.clone(), vec![handle.clone()])
                } else {
                    (entry_item.clone(), stack.clone())
                }
            })
            .collect()
    } else {
        family
            .iter()
            .map(|family_item| {
                if family_item == item {
                    (family_item.clone(), vec![handle.clone()])
                } else {
                    (family_item.clone(), Vec::new())
                }
            })
            .collect()
    };

    Navigation::new(Root::new(item.clone(), entries), Vec::new())
}

/// Replace the whole root with a single synthetic item holding one screen,
/// clearing every modal.
pub(super) fn show_on_root(state: &Navigation, handle: Option<&ScreenHandle>) -> Navigation {
    let handle = handle.cloned().unwrap_or_else(|| state.active_handle());
    Navigation::new(Root::solo(vec![handle]), Vec::new())
}
