//! Deferred screen descriptors.
//!
//! The topology never holds live screens. It holds [`ScreenHandle`]s:
//! opaque descriptors that can produce one screen instance on demand. What a
//! "screen" concretely is belongs to the host — the factory output is an
//! `Any` box the host downcasts to its own view type.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// Deferred constructor for one screen instance.
///
/// Implementations are registered by the host; the navigation layers only
/// pass handles around and, at presentation time, ask the host to build.
pub trait ScreenFactory: Send + Sync + 'static {
    /// Build the screen instance this descriptor describes.
    fn build(&self) -> Box<dyn Any + Send>;
}

/// Shared, cloneable handle to a [`ScreenFactory`].
///
/// Handles compare by identity (two clones of the same handle are equal; two
/// handles wrapping distinct factory allocations are not). The one place
/// type-level comparison matters — duplicate-presentation checks — uses
/// [`ScreenHandle::same_screen_type`], which compares the concrete factory
/// types captured at construction without building anything.
#[derive(Clone)]
pub struct ScreenHandle {
    factory: Arc<dyn ScreenFactory>,
    screen_type: TypeId,
    screen_name: &'static str,
}

impl ScreenHandle {
    /// Wrap a concrete factory.
    pub fn new<F: ScreenFactory>(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
            screen_type: TypeId::of::<F>(),
            screen_name: type_name::<F>(),
        }
    }

    /// Handle that builds nothing of interest.
    ///
    /// Used as the active-handle fallback on an empty topology so derived
    /// queries stay total.
    pub fn inert() -> Self {
        Self::new(InertScreen)
    }

    /// Build the screen instance.
    pub fn build(&self) -> Box<dyn Any + Send> {
        self.factory.build()
    }

    /// Type tag of the concrete factory, standing in for the screen type it
    /// produces.
    pub fn screen_type(&self) -> TypeId {
        self.screen_type
    }

    /// Short name of the concrete factory type (diagnostics only).
    pub fn screen_name(&self) -> &'static str {
        self.screen_name.rsplit("::").next().unwrap_or(self.screen_name)
    }

    /// Whether both handles would produce the same concrete screen type.
    pub fn same_screen_type(&self, other: &ScreenHandle) -> bool {
        self.screen_type == other.screen_type
    }

    /// Whether this is the inert fallback handle.
    pub fn is_inert(&self) -> bool {
        self.screen_type == TypeId::of::<InertScreen>()
    }
}

impl PartialEq for ScreenHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

impl Eq for ScreenHandle {}

impl fmt::Debug for ScreenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScreenHandle({})", self.screen_name())
    }
}

struct InertScreen;

impl ScreenFactory for InertScreen {
    fn build(&self) -> Box<dyn Any + Send> {
        Box::new(())
    }
}
