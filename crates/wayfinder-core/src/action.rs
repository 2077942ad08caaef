//! Navigation actions.
//!
//! Everything that can change the topology is one [`NavAction`] variant. The
//! reducer consumes the structural fields; `animated`, `chrome_hidden` and
//! `over_self` are carried through untouched for the synchronization layer,
//! which threads them into the imperative host calls.

use crate::item::{AnyNavigationItem, NavigationItem};
use crate::screen::ScreenHandle;

/// How many entries a pop-style transform removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopMode {
    /// Drop everything above the bottom entry of the addressed region.
    PopToRoot,
    /// Drop exactly this many entries.
    Pop(usize),
}

impl Default for PopMode {
    fn default() -> Self {
        PopMode::Pop(1)
    }
}

/// Which externally-driven UI change a reconciliation action mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    /// A back gesture completed a pop in the visible stack.
    Navigation,
    /// The user finished dismissing the top modal.
    Modal,
}

/// A navigation intent.
///
/// Dispatched by callers, by item activation, or — for
/// [`NavAction::SynchronizeState`] — by the synchronization layer itself.
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    /// Append a screen to the editable region, optionally dropping entries
    /// first. An omitted handle duplicates the currently visible screen.
    Push {
        /// Screen to append; `None` duplicates the active handle.
        handle: Option<ScreenHandle>,
        /// Entries to drop from the region before appending.
        pop: Option<PopMode>,
        /// Whether the host should animate the transition.
        animated: bool,
    },

    /// Remove entries from the top of the editable region, always leaving at
    /// least one.
    Pop {
        /// How many entries to remove.
        mode: PopMode,
        /// Whether the host should animate the transition.
        animated: bool,
    },

    /// Select a root item, rebuilding the root if the item belongs to a
    /// different navigation family. Clears every modal.
    Show {
        /// The item to select.
        item: AnyNavigationItem,
        /// Seed for the item's stack if it is empty; `None` duplicates the
        /// active handle.
        handle: Option<ScreenHandle>,
        /// Whether the host should animate the transition.
        animated: bool,
        /// Whether the host should hide its navigation chrome.
        chrome_hidden: bool,
    },

    /// Hard-reset the whole topology to a single synthetic item holding one
    /// screen. Clears every modal.
    ShowOnRoot {
        /// The screen to install; `None` duplicates the active handle.
        handle: Option<ScreenHandle>,
        /// Whether the host should animate the transition.
        animated: bool,
        /// Whether the host should hide its navigation chrome.
        chrome_hidden: bool,
    },

    /// Present a new overlay layer on top of the modal stack.
    ShowModal {
        /// The screen to present; `None` duplicates the active handle.
        handle: Option<ScreenHandle>,
        /// Present inside its own pushable stack region.
        as_navigation_stack: bool,
        /// Present even if the visible modal already shows the same screen
        /// type.
        over_self: bool,
        /// Whether the host should animate the transition.
        animated: bool,
    },

    /// Remove the topmost overlay layer, or all of them.
    DismissModal {
        /// Remove every layer instead of only the top one.
        dismiss_all: bool,
        /// Whether the host should animate the transition.
        animated: bool,
    },

    /// Reconciliation command synthesized after an externally-driven UI
    /// change; an alias for a single pop or a single dismissal.
    SynchronizeState {
        /// Which kind of external change is being mirrored.
        kind: SyncKind,
    },
}

impl NavAction {
    /// Push an explicit screen.
    pub fn push(handle: ScreenHandle) -> Self {
        NavAction::Push { handle: Some(handle), pop: None, animated: true }
    }

    /// Push an explicit screen after dropping entries per `pop`.
    pub fn push_replacing(handle: ScreenHandle, pop: PopMode) -> Self {
        NavAction::Push { handle: Some(handle), pop: Some(pop), animated: true }
    }

    /// Pop one entry.
    pub fn pop() -> Self {
        NavAction::Pop { mode: PopMode::default(), animated: true }
    }

    /// Pop `count` entries.
    pub fn pop_count(count: usize) -> Self {
        NavAction::Pop { mode: PopMode::Pop(count), animated: true }
    }

    /// Pop everything above the region's bottom entry.
    pub fn pop_to_root() -> Self {
        NavAction::Pop { mode: PopMode::PopToRoot, animated: true }
    }

    /// Select a root item, seeding its stack with `handle` if empty.
    pub fn show<T: NavigationItem>(item: T, handle: Option<ScreenHandle>) -> Self {
        NavAction::Show {
            item: AnyNavigationItem::new(item),
            handle,
            animated: true,
            chrome_hidden: true,
        }
    }

    /// Select an already-erased root item.
    pub fn show_any(item: AnyNavigationItem, handle: Option<ScreenHandle>) -> Self {
        NavAction::Show { item, handle, animated: true, chrome_hidden: true }
    }

    /// Hard-reset the topology to a single screen.
    pub fn show_on_root(handle: ScreenHandle) -> Self {
        NavAction::ShowOnRoot { handle: Some(handle), animated: true, chrome_hidden: true }
    }

    /// Present a screen as an opaque modal layer.
    pub fn show_modal(handle: ScreenHandle) -> Self {
        NavAction::ShowModal {
            handle: Some(handle),
            as_navigation_stack: false,
            over_self: false,
            animated: true,
        }
    }

    /// Present a screen as a modal layer with its own push history.
    pub fn show_modal_stack(handle: ScreenHandle) -> Self {
        NavAction::ShowModal {
            handle: Some(handle),
            as_navigation_stack: true,
            over_self: false,
            animated: true,
        }
    }

    /// Dismiss the topmost modal layer.
    pub fn dismiss_modal() -> Self {
        NavAction::DismissModal { dismiss_all: false, animated: true }
    }

    /// Dismiss every modal layer.
    pub fn dismiss_all_modals() -> Self {
        NavAction::DismissModal { dismiss_all: true, animated: true }
    }

    /// Reconciliation command for an externally observed UI change.
    pub fn synchronize(kind: SyncKind) -> Self {
        NavAction::SynchronizeState { kind }
    }
}
