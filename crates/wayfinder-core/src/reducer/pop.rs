//! Pop: remove entries from the top of the editable region.

use crate::action::PopMode;
use crate::navigation::{Modal, Navigation};

/// Drop entries from the top stack, keeping at least one.
///
/// No-op unless the drop count is positive and strictly smaller than the
/// region's depth. With a modal up the drop addresses the top modal's stack
/// and the root is untouched; an opaque top modal exposes an empty region,
/// so the guard already rules it out.
pub(super) fn pop(state: &Navigation, mode: PopMode) -> Navigation {
    let top_len = state.top_stack().len();
    let drop_count = match mode {
        PopMode::PopToRoot => top_len.saturating_sub(1),
        PopMode::Pop(count) => count,
    };
    if drop_count == 0 || top_len <= drop_count {
        return state.clone();
    }

    let mut new_top = state.top_stack().to_vec();
    new_top.truncate(top_len - drop_count);

    if state.modals().is_empty() {
        Navigation::new(state.root().with_current_stack(new_top), Vec::new())
    } else {
        let mut modals = state.modals().to_vec();
        modals.pop();
        modals.push(Modal::NavigationStack(new_top));
        Navigation::new(state.root().clone(), modals)
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::navigation::Root;
    use crate::screen::{ScreenFactory, ScreenHandle};

    struct Blank;

    impl ScreenFactory for Blank {
        fn build(&self) -> Box<dyn Any + Send> {
            Box::new(())
        }
    }

    fn handle() -> ScreenHandle {
        ScreenHandle::new(Blank)
    }

    fn rooted(stack: Vec<ScreenHandle>) -> Navigation {
        Navigation::new(Root::solo(stack), vec![])
    }

    #[test]
    fn pop_one_drops_the_top_entry() {
        let f1 = handle();
        let state = rooted(vec![f1.clone(), handle()]);
        assert_eq!(pop(&state, PopMode::Pop(1)).top_stack(), &[f1]);
    }

    #[test]
    fn pop_to_root_keeps_only_the_bottom_entry() {
        let f1 = handle();
        let state = rooted(vec![f1.clone(), handle(), handle()]);
        assert_eq!(pop(&state, PopMode::PopToRoot).top_stack(), &[f1]);
    }

    #[test]
    fn pop_past_depth_is_identity() {
        let state = rooted(vec![handle(), handle()]);
        assert_eq!(pop(&state, PopMode::Pop(2)), state);
        assert_eq!(pop(&state, PopMode::Pop(9)), state);
    }

    #[test]
    fn pop_on_a_single_entry_region_is_identity() {
        let state = rooted(vec![handle()]);
        assert_eq!(pop(&state, PopMode::Pop(1)), state);
        assert_eq!(pop(&state, PopMode::PopToRoot), state);
    }

    #[test]
    fn pop_zero_is_identity() {
        let state = rooted(vec![handle(), handle()]);
        assert_eq!(pop(&state, PopMode::Pop(0)), state);
    }

    #[test]
    fn pop_addresses_the_top_modal_stack_and_spares_the_root() {
        let f1 = handle();
        let f3 = handle();
        let state = Navigation::new(
            Root::solo(vec![f1.clone(), handle()]),
            vec![Modal::NavigationStack(vec![f3.clone(), handle()])],
        );
        let next = pop(&state, PopMode::Pop(1));
        assert_eq!(next.modals(), &[Modal::NavigationStack(vec![f3])]);
        assert_eq!(next.root(), state.root());
    }

    #[test]
    fn pop_never_reaches_below_an_opaque_modal() {
        let state = Navigation::new(
            Root::solo(vec![handle(), handle()]),
            vec![Modal::Single(handle())],
        );
        assert_eq!(pop(&state, PopMode::Pop(1)), state);
    }
}
