//! Navigation item identity and type erasure.
//!
//! A navigation item names one addressable root-level destination (a tab, a
//! section). Different hosts use different concrete item types, so the
//! topology stores items behind [`AnyNavigationItem`], a type-erased wrapper
//! that preserves per-concrete-type equality and hashing: two erased items
//! are equal only if their underlying concrete types and values match.
//! Consumers that know the concrete family can filter back down with
//! [`AnyNavigationItem::downcast_ref`].

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::action::NavAction;

/// Identity of an addressable root-level destination.
///
/// An item carries the action dispatched when it is selected (e.g. a tab
/// tap) and knows the full ordered family it belongs to. Equality is
/// structural; items of different concrete types are never equal.
pub trait NavigationItem:
    Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Action dispatched when this item is selected, if any.
    fn activation(&self) -> Option<NavAction>;

    /// Every item of this item's navigation family, in display order.
    fn family(&self) -> Vec<Self>;
}

/// Object-safe mirror of [`NavigationItem`] plus the hooks equality and
/// hashing need once the concrete type is gone.
trait ErasedItem: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_erased(&self, other: &dyn ErasedItem) -> bool;
    fn hash_erased(&self, state: &mut dyn Hasher);
    fn activation_erased(&self) -> Option<NavAction>;
    fn family_erased(&self) -> Vec<AnyNavigationItem>;
    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: NavigationItem> ErasedItem for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_erased(&self, other: &dyn ErasedItem) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| o == self)
    }

    fn hash_erased(&self, mut state: &mut dyn Hasher) {
        // Tag with the concrete type so equal-looking values of different
        // families land in different buckets.
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn activation_erased(&self) -> Option<NavAction> {
        self.activation()
    }

    fn family_erased(&self) -> Vec<AnyNavigationItem> {
        self.family().into_iter().map(AnyNavigationItem::new).collect()
    }

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Type-erased [`NavigationItem`].
///
/// Cheap to clone (shared allocation). Equality and hashing delegate to the
/// wrapped concrete value, so erased items behave exactly like their
/// originals in maps and comparisons.
#[derive(Clone)]
pub struct AnyNavigationItem {
    inner: Arc<dyn ErasedItem>,
}

impl AnyNavigationItem {
    /// Erase a concrete item.
    pub fn new<T: NavigationItem>(item: T) -> Self {
        Self { inner: Arc::new(item) }
    }

    /// Borrow the concrete item back, if it is a `T`.
    pub fn downcast_ref<T: NavigationItem>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }

    /// Whether the wrapped item is a `T`.
    pub fn is<T: NavigationItem>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Action dispatched when this item is selected, if any.
    pub fn activation(&self) -> Option<NavAction> {
        self.inner.activation_erased()
    }

    /// The full ordered family this item belongs to, erased.
    pub fn family(&self) -> Vec<AnyNavigationItem> {
        self.inner.family_erased()
    }
}

impl PartialEq for AnyNavigationItem {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_erased(other.inner.as_ref())
    }
}

impl Eq for AnyNavigationItem {}

impl Hash for AnyNavigationItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash_erased(state);
    }
}

impl fmt::Debug for AnyNavigationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_erased(f)
    }
}

impl<T: NavigationItem> From<T> for AnyNavigationItem {
    fn from(item: T) -> Self {
        Self::new(item)
    }
}

/// The synthetic item used when the root hosts a single unnamed stack
/// (process start, or after a hard root reset).
///
/// Selecting it dispatches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoloItem;

impl NavigationItem for SoloItem {
    fn activation(&self) -> Option<NavAction> {
        None
    }

    fn family(&self) -> Vec<Self> {
        vec![SoloItem]
    }
}
