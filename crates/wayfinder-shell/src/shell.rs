//! The shell: serialized dispatch over the single authoritative state.

use tracing::debug;
use wayfinder_core::{AnyNavigationItem, NavAction, Navigation, SyncKind, reduce};

use crate::config::{ConfigError, ShellConfig};
use crate::dispatch::Dispatcher;
use crate::host::{HostUi, RootTarget};
use crate::observer::NavigationObserver;
use crate::protocol;

/// Owns the current [`Navigation`] value, the host UI, and the observers,
/// and runs the serialized dispatch discipline: for each accepted action,
/// guards → reduce → effect continuation → observer notification, fully,
/// before the next action begins.
///
/// The shell lives on one logical execution context. Reentrant dispatches —
/// an effect, observer or host callback dispatching while a drain is
/// running — enqueue through the shared [`Dispatcher`] and are processed
/// before the drain ends.
pub struct Shell<H: HostUi> {
    state: Navigation,
    host: H,
    dispatcher: Dispatcher,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl<H: HostUi> Shell<H> {
    /// Validate `config`, seed the host with the initial screen, and start
    /// from the process-start topology.
    pub fn new(config: ShellConfig, mut host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        host.set_root(
            &RootTarget::Screen(config.initial_screen.clone()),
            false,
            config.chrome_hidden,
        );
        Ok(Self {
            state: Navigation::initial(),
            host,
            dispatcher: Dispatcher::default(),
            observers: Vec::new(),
        })
    }

    /// The current topology.
    pub fn state(&self) -> &Navigation {
        &self.state
    }

    /// The host UI.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host UI (test doubles, platform quirks).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handle for enqueuing actions from effects, observers or the host.
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Register an observer notified after every accepted dispatch.
    pub fn add_observer(&mut self, observer: Box<dyn NavigationObserver>) {
        self.observers.push(observer);
    }

    /// Dispatch an action and drain the queue.
    pub fn dispatch(&mut self, action: NavAction) {
        self.dispatcher.dispatch(action);
        self.drain();
    }

    /// Process actions enqueued out-of-band through a [`Dispatcher`] clone.
    pub fn pump(&mut self) {
        self.drain();
    }

    /// Dispatch the activation action of a selected item, if it has one.
    pub fn activate_item(&mut self, item: &AnyNavigationItem) {
        if let Some(action) = item.activation() {
            self.dispatch(action);
        }
    }

    /// The host observed a back gesture completing a pop.
    pub fn gesture_pop_completed(&mut self) {
        self.dispatch(NavAction::synchronize(SyncKind::Navigation));
    }

    /// The host observed the top modal finishing a user-driven dismissal.
    pub fn modal_dismiss_completed(&mut self) {
        self.dispatch(NavAction::synchronize(SyncKind::Modal));
    }

    fn drain(&mut self) {
        if !self.dispatcher.begin_drain() {
            // A drain higher up the call stack will process what we queued.
            return;
        }
        while let Some(action) = self.dispatcher.next() {
            self.process(action);
        }
        self.dispatcher.end_drain();
    }

    fn process(&mut self, action: NavAction) {
        if !protocol::admit(&action, &self.state, &self.host) {
            debug!(?action, "action suppressed by guard");
            return;
        }

        let new = reduce(&self.state, &action);
        let old = std::mem::replace(&mut self.state, new);

        protocol::run_effect(&action, &old, &self.state, &mut self.host);

        for observer in &mut self.observers {
            observer.navigation_changed(&old, &self.state);
        }
    }
}
