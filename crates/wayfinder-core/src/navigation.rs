//! Navigation topology value types and derived queries.
//!
//! ```text
//! Navigation
//! ├── root: Root                      // named stacks, one current
//! │   ├── current_item
//! │   └── entries: [(item, Stack)]    // each item unique
//! └── modals: [Modal]                 // bottom-to-top; last is visible
//!     ├── Single(handle)              // opaque, not pushable
//!     └── NavigationStack(Stack)      // pushable overlay region
//! ```
//!
//! Values are immutable; every transition replaces the whole [`Navigation`]
//! wholesale (see [`crate::reduce`]). The queries here are pure and total.

use crate::item::{AnyNavigationItem, NavigationItem, SoloItem};
use crate::screen::ScreenHandle;

/// Ordered push history within one region; the last entry is the visible
/// top. May be empty.
pub type Stack = Vec<ScreenHandle>;

/// The non-overlay topology: every addressable item with its stack, plus
/// which item is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root {
    current_item: AnyNavigationItem,
    entries: Vec<(AnyNavigationItem, Stack)>,
}

impl Root {
    /// Root over an explicit entry list.
    ///
    /// The entries' item set is the navigation family in effect; items are
    /// expected to be unique. `current` need not have a non-empty stack.
    pub fn new(current: AnyNavigationItem, entries: Vec<(AnyNavigationItem, Stack)>) -> Self {
        Self { current_item: current, entries }
    }

    /// Root holding a single synthetic item with the given stack.
    pub fn solo(stack: Stack) -> Self {
        let item = AnyNavigationItem::new(SoloItem);
        Self { current_item: item.clone(), entries: vec![(item, stack)] }
    }

    /// The currently selected item.
    pub fn current_item(&self) -> &AnyNavigationItem {
        &self.current_item
    }

    /// All entries, in family display order.
    pub fn entries(&self) -> &[(AnyNavigationItem, Stack)] {
        &self.entries
    }

    /// Stack paired with the current item; empty if the item has no entry.
    pub fn current_stack(&self) -> &[ScreenHandle] {
        self.entries
            .iter()
            .find(|(item, _)| *item == self.current_item)
            .map_or(&[], |(_, stack)| stack.as_slice())
    }

    /// The ordered items currently enumerated in this root — the navigation
    /// family in effect.
    pub fn family(&self) -> Vec<AnyNavigationItem> {
        self.entries.iter().map(|(item, _)| item.clone()).collect()
    }

    /// Copy of this root with the current item's stack replaced.
    ///
    /// Leaves the root unchanged if the current item has no entry.
    pub(crate) fn with_current_stack(&self, stack: Stack) -> Root {
        let entries = self
            .entries
            .iter()
            .map(|(item, existing)| {
                if *item == self.current_item {
                    (item.clone(), stack.clone())
                } else {
                    (item.clone(), existing.clone())
                }
            })
            .collect();
        Root { current_item: self.current_item.clone(), entries }
    }
}

/// One overlay layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// A single screen. Opaque: nothing can be pushed into it, and it blocks
    /// pushes into the modal layer until it is collapsed away.
    Single(ScreenHandle),
    /// An overlay hosting its own push history — the only pushable kind of
    /// modal region.
    NavigationStack(Stack),
}

impl Modal {
    /// The layer's visible handle: the screen itself, or the stack's top.
    pub fn handle(&self) -> Option<&ScreenHandle> {
        match self {
            Modal::Single(handle) => Some(handle),
            Modal::NavigationStack(stack) => stack.last(),
        }
    }

    /// Whether this layer hosts its own push history.
    pub fn has_navigation(&self) -> bool {
        matches!(self, Modal::NavigationStack(_))
    }
}

/// The root aggregate: root topology plus the modal overlay, bottom-to-top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    root: Root,
    modals: Vec<Modal>,
}

impl Navigation {
    /// Navigation over an explicit root and modal list.
    pub fn new(root: Root, modals: Vec<Modal>) -> Self {
        Self { root, modals }
    }

    /// The process-start topology: a single synthetic item holding an empty
    /// stack, no modals.
    pub fn initial() -> Self {
        Self { root: Root::solo(Vec::new()), modals: Vec::new() }
    }

    /// The non-overlay topology.
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Overlay layers, bottom-to-top; the last is the visible one.
    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    /// The stack edits currently address: the top modal's stack if the top
    /// modal is pushable, an empty region if it is opaque, the root's
    /// current stack if no modal is up.
    pub fn top_stack(&self) -> &[ScreenHandle] {
        match self.modals.last() {
            Some(Modal::NavigationStack(stack)) => stack.as_slice(),
            Some(Modal::Single(_)) => &[],
            None => self.root.current_stack(),
        }
    }

    /// Handle of the screen the user currently sees.
    ///
    /// Falls back through the root's current stack to the inert handle, so
    /// the query is total even on an empty topology.
    pub fn active_handle(&self) -> ScreenHandle {
        self.modals
            .last()
            .and_then(Modal::handle)
            .or_else(|| self.root.current_stack().last())
            .cloned()
            .unwrap_or_else(ScreenHandle::inert)
    }

    /// The root family projected onto a concrete item type, preserving
    /// order and dropping items of other types.
    pub fn family_items<T: NavigationItem>(&self) -> Vec<T> {
        self.root
            .entries
            .iter()
            .filter_map(|(item, _)| item.downcast_ref::<T>().cloned())
            .collect()
    }

    /// The current item, if it is a `T`.
    pub fn current_item_as<T: NavigationItem>(&self) -> Option<T> {
        self.root.current_item.downcast_ref::<T>().cloned()
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::initial()
    }
}
