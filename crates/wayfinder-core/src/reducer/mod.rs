//! The reducer pipeline.
//!
//! One pure, total transform per action kind, combined into [`reduce`]. The
//! match arms keep the pipeline's fixed priority order: root-level resets
//! first, then reconciliation, then stack edits, then the modal layer.
//!
//! Reducers only read the structural fields of an action; presentation
//! fields (`animated`, `chrome_hidden`, `over_self`) belong to the
//! synchronization layer. Guard-checked requests that cannot apply — pop
//! past depth, dismissal with nothing up — resolve to the unchanged state,
//! never to an error.

mod modal;
mod pop;
mod push;
mod show;
mod sync;

use tracing::trace;

use crate::action::NavAction;
use crate::navigation::{Modal, Navigation};

/// Compute the topology after `action`.
///
/// Pure: no side effects, no failure modes. The input state is never
/// mutated; the result is a wholesale replacement value.
pub fn reduce(state: &Navigation, action: &NavAction) -> Navigation {
    trace!(?action, "reducing");
    match action {
        NavAction::ShowOnRoot { handle, .. } => show::show_on_root(state, handle.as_ref()),
        NavAction::Show { item, handle, .. } => show::show(state, item, handle.as_ref()),
        NavAction::SynchronizeState { kind } => sync::synchronize(state, *kind),
        NavAction::Push { handle, pop, .. } => push::push(state, handle.as_ref(), *pop),
        NavAction::Pop { mode, .. } => pop::pop(state, *mode),
        NavAction::ShowModal { handle, as_navigation_stack, .. } => {
            modal::show_modal(state, handle.as_ref(), *as_navigation_stack)
        }
        NavAction::DismissModal { dismiss_all, .. } => {
            modal::dismiss_modal(state, *dismiss_all)
        }
    }
}

/// Drop trailing opaque modals: scanning from the top down, every `Single`
/// layer goes until a pushable layer or the bottom is reached. Pushing or
/// presenting through bare modals implicitly dismisses them.
fn collapse_bare_modals(modals: &[Modal]) -> Vec<Modal> {
    let keep = modals
        .iter()
        .rposition(Modal::has_navigation)
        .map_or(0, |index| index + 1);
    modals[..keep].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenHandle;

    fn single() -> Modal {
        Modal::Single(ScreenHandle::inert())
    }

    fn stack() -> Modal {
        Modal::NavigationStack(vec![ScreenHandle::inert()])
    }

    #[test]
    fn collapse_drops_only_trailing_singles() {
        assert!(collapse_bare_modals(&[single(), single()]).is_empty());
        assert_eq!(collapse_bare_modals(&[stack(), single()]).len(), 1);
        assert_eq!(collapse_bare_modals(&[single(), stack()]).len(), 2);
        assert!(collapse_bare_modals(&[]).is_empty());
    }
}
