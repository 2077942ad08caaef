//! Recording host-UI double.

use tracing::debug;
use wayfinder_core::{AnyNavigationItem, ScreenHandle};
use wayfinder_shell::{HostUi, RootTarget};

/// One imperative call the shell made against the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOp {
    /// An overlay layer was presented.
    Present {
        /// Short name of the presented screen's factory type.
        screen: &'static str,
        /// Whether the layer hosts its own push history.
        as_stack: bool,
        /// Animation flag as received.
        animated: bool,
    },
    /// Overlay layers were dismissed from the top.
    DismissOverlays {
        /// How many layers.
        count: usize,
        /// Animation flag as received.
        animated: bool,
    },
    /// A screen was pushed onto the visible region.
    Push {
        /// Short name of the pushed screen's factory type.
        screen: &'static str,
        /// Animation flag as received.
        animated: bool,
    },
    /// Screens were popped off the visible region.
    Pop {
        /// How many screens.
        count: usize,
        /// Animation flag as received.
        animated: bool,
    },
    /// Screens were dropped and one pushed, as a single transition.
    Replace {
        /// How many screens were dropped first.
        drop_count: usize,
        /// Short name of the pushed screen's factory type.
        screen: &'static str,
        /// Animation flag as received.
        animated: bool,
    },
    /// The base was replaced with a single screen.
    SetRootScreen {
        /// Short name of the installed screen's factory type.
        screen: &'static str,
        /// Animation flag as received.
        animated: bool,
        /// Chrome visibility flag as received.
        chrome_hidden: bool,
    },
    /// The base was replaced with a family container.
    SetRootFamily {
        /// Number of items the container enumerates.
        len: usize,
        /// Animation flag as received.
        animated: bool,
        /// Chrome visibility flag as received.
        chrome_hidden: bool,
    },
    /// An item was selected in the live family container.
    Select {
        /// Debug rendering of the selected item.
        item: String,
    },
}

#[derive(Debug, Clone)]
struct LiveOverlay {
    as_stack: bool,
    depth: usize,
}

#[derive(Debug)]
enum BaseRegion {
    Screen { depth: usize },
    Family { current: usize, depths: Vec<usize>, keys: Vec<AnyNavigationItem> },
}

/// Host double that records calls and models the live UI counts.
///
/// The model mirrors what a real toolkit would report: per-item stack depths
/// inside a family container, a flat depth for a solo root, an overlay stack
/// whose layers may or may not be pushable. The `simulate_*` methods change
/// the live model *without* recording an op — they stand in for the user
/// acting on the UI directly, and must be followed by the matching shell
/// life-cycle signal, exactly as a production host would report it.
#[derive(Debug)]
pub struct RecordingHost {
    ops: Vec<HostOp>,
    overlays: Vec<LiveOverlay>,
    base: BaseRegion,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Empty host: no overlays, an empty solo base.
    pub fn new() -> Self {
        Self { ops: Vec::new(), overlays: Vec::new(), base: BaseRegion::Screen { depth: 0 } }
    }

    /// Every imperative call received, in order.
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Drain the recorded calls.
    pub fn take_ops(&mut self) -> Vec<HostOp> {
        std::mem::take(&mut self.ops)
    }

    /// The user completed a back gesture: the visible region lost its top
    /// entry outside the declarative pipeline.
    pub fn simulate_back_gesture(&mut self) {
        if let Some(depth) = self.visible_depth_mut() {
            *depth = depth.saturating_sub(1);
        }
        debug!("simulated back gesture");
    }

    /// The user dismissed the top modal: the layer is gone outside the
    /// declarative pipeline.
    pub fn simulate_modal_dismissal(&mut self) {
        self.overlays.pop();
        debug!("simulated user-driven modal dismissal");
    }

    fn visible_depth_mut(&mut self) -> Option<&mut usize> {
        if let Some(top) = self.overlays.last_mut() {
            if top.as_stack { Some(&mut top.depth) } else { None }
        } else {
            match &mut self.base {
                BaseRegion::Screen { depth } => Some(depth),
                BaseRegion::Family { current, depths, .. } => depths.get_mut(*current),
            }
        }
    }
}

impl HostUi for RecordingHost {
    fn present_overlay(&mut self, handle: &ScreenHandle, as_stack: bool, animated: bool) {
        self.ops.push(HostOp::Present { screen: handle.screen_name(), as_stack, animated });
        self.overlays.push(LiveOverlay { as_stack, depth: 1 });
    }

    fn dismiss_overlays(&mut self, count: usize, animated: bool) {
        self.ops.push(HostOp::DismissOverlays { count, animated });
        let remaining = self.overlays.len().saturating_sub(count);
        self.overlays.truncate(remaining);
    }

    fn push_screen(&mut self, handle: &ScreenHandle, animated: bool) {
        self.ops.push(HostOp::Push { screen: handle.screen_name(), animated });
        if let Some(depth) = self.visible_depth_mut() {
            *depth += 1;
        }
    }

    fn pop_screens(&mut self, count: usize, animated: bool) {
        self.ops.push(HostOp::Pop { count, animated });
        if let Some(depth) = self.visible_depth_mut() {
            *depth = depth.saturating_sub(count);
        }
    }

    fn replace_top_screens(&mut self, drop_count: usize, handle: &ScreenHandle, animated: bool) {
        self.ops.push(HostOp::Replace {
            drop_count,
            screen: handle.screen_name(),
            animated,
        });
        if let Some(depth) = self.visible_depth_mut() {
            *depth = depth.saturating_sub(drop_count) + 1;
        }
    }

    fn set_root(&mut self, target: &RootTarget, animated: bool, chrome_hidden: bool) {
        match target {
            RootTarget::Screen(handle) => {
                self.ops.push(HostOp::SetRootScreen {
                    screen: handle.screen_name(),
                    animated,
                    chrome_hidden,
                });
                self.base = BaseRegion::Screen { depth: 1 };
            }
            RootTarget::Family { items, current } => {
                self.ops.push(HostOp::SetRootFamily { len: items.len(), animated, chrome_hidden });
                let selected = items.iter().position(|item| item == current).unwrap_or(0);
                self.base = BaseRegion::Family {
                    current: selected,
                    depths: vec![0; items.len()],
                    keys: items.clone(),
                };
            }
        }
    }

    fn select_item(&mut self, item: &AnyNavigationItem) {
        self.ops.push(HostOp::Select { item: format!("{item:?}") });
        if let BaseRegion::Family { current, keys, .. } = &mut self.base {
            if let Some(index) = keys.iter().position(|key| key == item) {
                *current = index;
            }
        }
    }

    fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    fn visible_stack_len(&self) -> usize {
        if let Some(top) = self.overlays.last() {
            if top.as_stack { top.depth } else { 0 }
        } else {
            match &self.base {
                BaseRegion::Screen { depth } => *depth,
                BaseRegion::Family { current, depths, .. } => {
                    depths.get(*current).copied().unwrap_or(0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{MainTab, compose_screen, detail_screen, home_screen};
    use wayfinder_core::{AnyNavigationItem, NavigationItem};

    use super::*;

    #[test]
    fn pushes_and_pops_track_the_visible_depth() {
        let mut host = RecordingHost::new();
        host.set_root(&RootTarget::Screen(home_screen()), false, true);
        assert_eq!(host.visible_stack_len(), 1);

        host.push_screen(&detail_screen(), true);
        host.push_screen(&detail_screen(), true);
        assert_eq!(host.visible_stack_len(), 3);

        host.pop_screens(2, true);
        assert_eq!(host.visible_stack_len(), 1);
    }

    #[test]
    fn a_pushable_overlay_becomes_the_visible_region() {
        let mut host = RecordingHost::new();
        host.set_root(&RootTarget::Screen(home_screen()), false, true);
        host.present_overlay(&compose_screen(), true, true);
        assert_eq!(host.overlay_count(), 1);
        assert_eq!(host.visible_stack_len(), 1);

        host.push_screen(&detail_screen(), true);
        assert_eq!(host.visible_stack_len(), 2);

        host.dismiss_overlays(1, true);
        assert_eq!(host.overlay_count(), 0);
        assert_eq!(host.visible_stack_len(), 1);
    }

    #[test]
    fn an_opaque_overlay_exposes_an_empty_region() {
        let mut host = RecordingHost::new();
        host.set_root(&RootTarget::Screen(home_screen()), false, true);
        host.present_overlay(&compose_screen(), false, true);
        assert_eq!(host.visible_stack_len(), 0);
    }

    #[test]
    fn family_container_keeps_per_item_depths() {
        let mut host = RecordingHost::new();
        let items: Vec<AnyNavigationItem> =
            MainTab::Home.family().into_iter().map(AnyNavigationItem::new).collect();
        host.set_root(
            &RootTarget::Family { items: items.clone(), current: items[0].clone() },
            false,
            true,
        );
        host.push_screen(&home_screen(), false);
        assert_eq!(host.visible_stack_len(), 1);

        host.select_item(&items[1]);
        assert_eq!(host.visible_stack_len(), 0);

        host.select_item(&items[0]);
        assert_eq!(host.visible_stack_len(), 1);
    }

    #[test]
    fn simulations_change_the_live_model_without_recording() {
        let mut host = RecordingHost::new();
        host.set_root(&RootTarget::Screen(home_screen()), false, true);
        host.push_screen(&detail_screen(), true);
        let recorded = host.ops().len();

        host.simulate_back_gesture();
        assert_eq!(host.visible_stack_len(), 1);

        host.present_overlay(&compose_screen(), false, true);
        host.simulate_modal_dismissal();
        assert_eq!(host.overlay_count(), 0);

        assert_eq!(host.ops().len(), recorded + 1); // only the present
    }
}
