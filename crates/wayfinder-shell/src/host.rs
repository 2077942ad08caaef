//! Host UI collaborator trait.
//!
//! The [`HostUi`] trait decouples the synchronization shell from any
//! concrete toolkit. The shell computes *what* must happen to make the live
//! UI match the declarative topology; implementations perform the actual
//! presentation work and expose the two live counts the shell reads back
//! when reconciling.
//!
//! # Implementations
//!
//! - **Production**: wraps the toolkit's window/stack/overlay primitives.
//! - **Harness**: `wayfinder-harness` records every call and models the
//!   live counts deterministically, so the full shell runs in tests.
//!
//! The host is also the source of the two life-cycle signals the shell
//! consumes (see [`crate::Shell::gesture_pop_completed`] and
//! [`crate::Shell::modal_dismiss_completed`]): whenever the UI completes a
//! pop or a modal dismissal that the shell did not instruct, the host must
//! report it.

use wayfinder_core::{AnyNavigationItem, ScreenHandle};

/// What `set_root` installs at the base of the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RootTarget {
    /// A single screen hosted in the root region.
    Screen(ScreenHandle),
    /// A container enumerating a navigation family (e.g. a tab bar), with
    /// one item selected.
    Family {
        /// The addressable items, in display order.
        items: Vec<AnyNavigationItem>,
        /// The selected item.
        current: AnyNavigationItem,
    },
}

/// Imperative surface the shell drives, plus the live read-back counts.
///
/// Calls are fire-and-forget from the shell's perspective; failure handling
/// and animation mechanics are host concerns.
pub trait HostUi {
    /// Present a new overlay layer on top of everything.
    ///
    /// With `as_stack` the layer hosts its own push history.
    fn present_overlay(&mut self, handle: &ScreenHandle, as_stack: bool, animated: bool);

    /// Dismiss `count` overlay layers from the top.
    fn dismiss_overlays(&mut self, count: usize, animated: bool);

    /// Push a screen onto the currently visible stack region.
    fn push_screen(&mut self, handle: &ScreenHandle, animated: bool);

    /// Pop `count` screens off the currently visible stack region.
    fn pop_screens(&mut self, count: usize, animated: bool);

    /// Drop `drop_count` screens off the visible stack region, then push
    /// `handle`, as one transition.
    fn replace_top_screens(&mut self, drop_count: usize, handle: &ScreenHandle, animated: bool);

    /// Replace the base of the UI wholesale.
    fn set_root(&mut self, target: &RootTarget, animated: bool, chrome_hidden: bool);

    /// Select an item in the live family container.
    fn select_item(&mut self, item: &AnyNavigationItem);

    /// Number of live overlay layers.
    fn overlay_count(&self) -> usize;

    /// Number of live entries in the currently visible stack region.
    fn visible_stack_len(&self) -> usize;
}
