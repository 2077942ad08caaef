//! State observers.
//!
//! Observers are notified synchronously after each accepted dispatch, inside
//! the serialized discipline — they always see a fully-applied state, never
//! an intermediate one. An observer that wants to navigate in response holds
//! a [`crate::Dispatcher`] clone and enqueues.

use wayfinder_core::{Navigation, NavigationItem};

/// Fan-out notification after every state replacement.
pub trait NavigationObserver {
    /// Called with the superseded and the new topology.
    fn navigation_changed(&mut self, old: &Navigation, new: &Navigation);
}

impl<F> NavigationObserver for F
where
    F: FnMut(&Navigation, &Navigation),
{
    fn navigation_changed(&mut self, old: &Navigation, new: &Navigation) {
        self(old, new);
    }
}

/// Distinct-until-changed projection of the root family onto a concrete
/// item type.
///
/// Feeds a tab-bar-like consumer: the callback receives the ordered items
/// of type `T` and the selected one, and fires only when that pair actually
/// changes (and never with an empty item list — a root of a different
/// family is not this consumer's business).
pub struct FamilyObserver<T, F>
where
    T: NavigationItem,
    F: FnMut(&[T], Option<&T>),
{
    last: Option<(Vec<T>, Option<T>)>,
    callback: F,
}

impl<T, F> FamilyObserver<T, F>
where
    T: NavigationItem,
    F: FnMut(&[T], Option<&T>),
{
    /// Observer invoking `callback` on every distinct (items, selected)
    /// pair.
    pub fn new(callback: F) -> Self {
        Self { last: None, callback }
    }
}

impl<T, F> NavigationObserver for FamilyObserver<T, F>
where
    T: NavigationItem,
    F: FnMut(&[T], Option<&T>),
{
    fn navigation_changed(&mut self, _old: &Navigation, new: &Navigation) {
        let items: Vec<T> = new.family_items();
        if items.is_empty() {
            return;
        }
        let selected: Option<T> = new.current_item_as();
        let snapshot = (items, selected);
        if self.last.as_ref() == Some(&snapshot) {
            return;
        }
        (self.callback)(&snapshot.0, snapshot.1.as_ref());
        self.last = Some(snapshot);
    }
}
