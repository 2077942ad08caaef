//! Push: append a screen to the editable region.

use crate::action::PopMode;
use crate::navigation::{Modal, Navigation, Stack};
use crate::screen::ScreenHandle;

use super::collapse_bare_modals;

/// Append `handle` (or a duplicate of the visible screen) to the editable
/// region: the top modal's stack if the top modal is pushable after
/// collapsing bare modals, otherwise the root's current stack.
pub(super) fn push(
    state: &Navigation,
    handle: Option<&ScreenHandle>,
    pop: Option<PopMode>,
) -> Navigation {
    let handle = handle.cloned().unwrap_or_else(|| state.active_handle());
    let mut modals = collapse_bare_modals(state.modals());

    match modals.last_mut() {
        Some(Modal::NavigationStack(stack)) => {
            apply_embedded_pop(stack, pop);
            stack.push(handle);
            Navigation::new(state.root().clone(), modals)
        }
        _ => {
            let mut stack: Stack = state.root().current_stack().to_vec();
            apply_embedded_pop(&mut stack, pop);
            stack.push(handle);
            Navigation::new(state.root().with_current_stack(stack), modals)
        }
    }
}

/// The drop half of a pop-then-push. Applies only when the region has more
/// than one entry, and clamps so at least one entry survives the drop.
fn apply_embedded_pop(stack: &mut Stack, pop: Option<PopMode>) {
    let Some(mode) = pop else { return };
    if stack.len() <= 1 {
        return;
    }
    let drop = match mode {
        PopMode::PopToRoot => stack.len() - 1,
        PopMode::Pop(count) => count.min(stack.len() - 1),
    };
    stack.truncate(stack.len() - drop);
}
