//! Declarative navigation topology for Wayfinder
//!
//! This crate models an application's screen topology as an immutable value:
//! a root set of named stacks (e.g. tabs) plus a layered modal overlay. State
//! never changes in place; the pure [`reduce`] function computes a new
//! [`Navigation`] value from the previous one and a tagged [`NavAction`].
//!
//! # Components
//!
//! - [`NavigationItem`] / [`AnyNavigationItem`]: identity of an addressable
//!   root-level destination, type-erased without losing per-concrete-type
//!   equality and hashing.
//! - [`ScreenHandle`]: deferred descriptor that can produce one screen
//!   instance on demand, opaque to this crate.
//! - [`Navigation`], [`Root`], [`Modal`]: the topology value types and their
//!   derived read-only queries.
//! - [`reduce`]: the total, pure reducer pipeline.
//!
//! Nothing here performs I/O or talks to a UI toolkit; synchronization with
//! a live UI lives in `wayfinder-shell`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod action;
mod item;
mod navigation;
mod reducer;
mod screen;

pub use action::{NavAction, PopMode, SyncKind};
pub use item::{AnyNavigationItem, NavigationItem, SoloItem};
pub use navigation::{Modal, Navigation, Root, Stack};
pub use reducer::reduce;
pub use screen::{ScreenFactory, ScreenHandle};
