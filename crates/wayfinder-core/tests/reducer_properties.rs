//! Property-based and scenario tests for the reducer pipeline.
//!
//! Properties verify the algebraic laws of the reducer — no-op identities,
//! push/pop round trips, dismissal idempotence, structural invariants —
//! under arbitrary action sequences. Scenario tests walk the concrete
//! topology transitions a navigating user would produce.

use proptest::prelude::*;
use wayfinder_core::{
    AnyNavigationItem, Modal, NavAction, Navigation, NavigationItem, PopMode, Root, ScreenFactory,
    ScreenHandle, SyncKind, reduce,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tab {
    A,
    B,
    C,
}

impl NavigationItem for Tab {
    fn activation(&self) -> Option<NavAction> {
        Some(NavAction::show(*self, None))
    }

    fn family(&self) -> Vec<Self> {
        vec![Tab::A, Tab::B, Tab::C]
    }
}

struct Blank;

impl ScreenFactory for Blank {
    fn build(&self) -> Box<dyn std::any::Any + Send> {
        Box::new(())
    }
}

fn handle() -> ScreenHandle {
    ScreenHandle::new(Blank)
}

fn item(tab: Tab) -> AnyNavigationItem {
    AnyNavigationItem::new(tab)
}

fn handle_strategy() -> impl Strategy<Value = ScreenHandle> {
    any::<bool>().prop_map(|_| handle())
}

fn tab_strategy() -> impl Strategy<Value = Tab> {
    prop_oneof![Just(Tab::A), Just(Tab::B), Just(Tab::C)]
}

fn action_strategy() -> impl Strategy<Value = NavAction> {
    prop_oneof![
        3 => handle_strategy().prop_map(NavAction::push),
        1 => (handle_strategy(), 1usize..4)
            .prop_map(|(h, n)| NavAction::push_replacing(h, PopMode::Pop(n))),
        2 => (0usize..4).prop_map(NavAction::pop_count),
        1 => Just(NavAction::pop_to_root()),
        2 => (tab_strategy(), proptest::option::of(handle_strategy()))
            .prop_map(|(tab, h)| NavAction::show(tab, h)),
        1 => handle_strategy().prop_map(NavAction::show_on_root),
        2 => handle_strategy().prop_map(NavAction::show_modal),
        2 => handle_strategy().prop_map(NavAction::show_modal_stack),
        1 => Just(NavAction::dismiss_modal()),
        1 => Just(NavAction::dismiss_all_modals()),
        1 => Just(NavAction::synchronize(SyncKind::Navigation)),
        1 => Just(NavAction::synchronize(SyncKind::Modal)),
    ]
}

/// Fold an action sequence from the process-start topology.
fn replay(actions: &[NavAction]) -> Navigation {
    actions
        .iter()
        .fold(Navigation::initial(), |state, action| reduce(&state, action))
}

/// Structural soundness every reachable state must satisfy.
fn assert_sound(state: &Navigation) {
    let family = state.root().family();
    assert!(
        family.contains(state.root().current_item()),
        "current item must be enumerated in the root entries"
    );
    for (index, (item, _)) in state.root().entries().iter().enumerate() {
        let duplicates = state.root().entries()[index + 1..]
            .iter()
            .any(|(other, _)| other == item);
        assert!(!duplicates, "root entries must have unique items");
    }
}

proptest! {
    #[test]
    fn prop_every_reachable_state_is_sound(
        actions in prop::collection::vec(action_strategy(), 0..40)
    ) {
        let mut state = Navigation::initial();
        for action in &actions {
            state = reduce(&state, action);
            assert_sound(&state);
        }
    }

    #[test]
    fn prop_pop_on_a_shallow_region_is_identity(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let state = replay(&actions);
        prop_assume!(state.top_stack().len() <= 1);
        prop_assert_eq!(reduce(&state, &NavAction::pop()), state.clone());
        prop_assert_eq!(reduce(&state, &NavAction::pop_to_root()), state);
    }

    #[test]
    fn prop_dismiss_with_no_modal_is_identity(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let state = replay(&actions);
        prop_assume!(state.modals().is_empty());
        prop_assert_eq!(reduce(&state, &NavAction::dismiss_modal()), state.clone());
        prop_assert_eq!(reduce(&state, &NavAction::dismiss_all_modals()), state);
    }

    #[test]
    fn prop_push_push_pop_two_round_trips(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let state = replay(&actions);
        prop_assume!(!state.top_stack().is_empty());
        prop_assume!(!matches!(state.modals().last(), Some(Modal::Single(_))));

        let after = reduce(
            &reduce(
                &reduce(&state, &NavAction::push(handle())),
                &NavAction::push(handle()),
            ),
            &NavAction::pop_count(2),
        );
        prop_assert_eq!(after, state);
    }

    #[test]
    fn prop_dismiss_all_is_idempotent(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let state = replay(&actions);
        let once = reduce(&state, &NavAction::dismiss_all_modals());
        let twice = reduce(&once, &NavAction::dismiss_all_modals());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_synchronize_navigation_matches_a_single_pop(
        actions in prop::collection::vec(action_strategy(), 0..25)
    ) {
        let state = replay(&actions);
        prop_assert_eq!(
            reduce(&state, &NavAction::synchronize(SyncKind::Navigation)),
            reduce(&state, &NavAction::pop()),
        );
        prop_assert_eq!(
            reduce(&state, &NavAction::synchronize(SyncKind::Modal)),
            reduce(&state, &NavAction::dismiss_modal()),
        );
    }
}

/// A user pushes twice and pops once inside one tab.
#[test]
fn scenario_push_push_pop_within_one_tab() {
    let f1 = handle();
    let f2 = handle();
    let start = Navigation::new(Root::new(item(Tab::A), vec![(item(Tab::A), vec![])]), vec![]);

    let state = reduce(&start, &NavAction::push(f1.clone()));
    assert_eq!(state.top_stack(), &[f1.clone()]);

    let state = reduce(&state, &NavAction::push(f2.clone()));
    assert_eq!(state.top_stack(), &[f1.clone(), f2]);

    let state = reduce(&state, &NavAction::pop());
    assert_eq!(state.top_stack(), &[f1]);
    assert_eq!(state.root().current_item(), &item(Tab::A));
}

/// A modal with its own stack absorbs pushes, then goes away wholesale.
#[test]
fn scenario_pushable_modal_absorbs_pushes() {
    let f1 = handle();
    let f3 = handle();
    let f4 = handle();
    let start = Navigation::new(
        Root::new(item(Tab::A), vec![(item(Tab::A), vec![f1.clone()])]),
        vec![],
    );

    let state = reduce(&start, &NavAction::show_modal_stack(f3.clone()));
    assert_eq!(state.modals(), &[Modal::NavigationStack(vec![f3.clone()])]);

    let state = reduce(&state, &NavAction::push(f4.clone()));
    assert_eq!(state.modals(), &[Modal::NavigationStack(vec![f3, f4])]);
    assert_eq!(state.root().current_stack(), &[f1]);

    let state = reduce(&state, &NavAction::dismiss_modal());
    assert!(state.modals().is_empty());
}

/// Switching tabs within one family preserves history; re-selecting a
/// populated tab only reaffirms the selection.
#[test]
fn scenario_tab_switch_preserves_history() {
    let f1 = handle();
    let f5 = handle();
    let f6 = handle();
    let start = Navigation::new(
        Root::new(item(Tab::A), vec![(item(Tab::A), vec![f1.clone()]), (item(Tab::B), vec![])]),
        vec![],
    );

    let state = reduce(&start, &NavAction::show(Tab::B, Some(f5.clone())));
    assert_eq!(state.root().current_item(), &item(Tab::B));
    assert_eq!(state.root().entries()[0].1, vec![f1]);
    assert_eq!(state.root().entries()[1].1, vec![f5.clone()]);

    let again = reduce(&state, &NavAction::show(Tab::B, Some(f6)));
    assert_eq!(again.root().entries()[1].1, vec![f5]);
    assert_eq!(again.root().current_item(), &item(Tab::B));
}

/// Pushing through a bare modal dismisses it and lands beneath.
#[test]
fn scenario_push_collapses_an_opaque_modal() {
    let f1 = handle();
    let f7 = handle();
    let start = Navigation::new(
        Root::new(item(Tab::A), vec![(item(Tab::A), vec![f1.clone()])]),
        vec![Modal::Single(handle())],
    );

    let state = reduce(&start, &NavAction::push(f7.clone()));
    assert!(state.modals().is_empty());
    assert_eq!(state.top_stack(), &[f1, f7]);
}
