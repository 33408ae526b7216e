//! Integration tests for the editor state machine.
//!
//! These drive `EditorState` purely through `Action`s, the same way the TUI
//! does, and check the resulting trees.

use std::sync::Arc;

use menu_builder::editor::{Button, Outcome};
use menu_builder::{Action, EditorState, NodeKey};

fn key_of(state: &EditorState, title: &str) -> NodeKey {
    state
        .tree()
        .iter()
        .find(|(_, node)| node.title == title)
        .map(|(_, node)| node.key.clone())
        .unwrap()
}

fn run(state: EditorState, steps: &[Step]) -> EditorState {
    steps.iter().fold(state, |state, step| match step {
        Step::Type(text) => state.apply(Action::SetDraft(text.to_string())),
        Step::Select(title) => {
            let key = key_of(&state, title);
            state.apply(Action::Select(vec![key]))
        }
        Step::Press(button) => state.apply(button.action()),
    })
}

enum Step {
    Type(&'static str),
    Select(&'static str),
    Press(Button),
}

use Step::*;

#[test]
fn test_menu_scenario() {
    let state = run(
        EditorState::default(),
        &[
            Type("Food"),
            Press(Button::AddCategory),
            Type("Drinks"),
            Press(Button::AddCategory),
            Select("Food"),
            Type("Fruit"),
            Press(Button::AddSubcategory),
            Select("Fruit"),
            Press(Button::EditNode),
            Type("Fresh Fruit"),
            Press(Button::SaveEdit),
            Select("Drinks"),
            Press(Button::DeleteNode),
        ],
    );

    let roots = state.tree().roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].title, "Food");
    assert_eq!(roots[0].children.len(), 1);
    assert_eq!(roots[0].children[0].title, "Fresh Fruit");
    assert!(roots[0].children[0].children.is_empty());
    assert!(state.selected().is_none());
    assert!(!state.is_editing());
}

#[test]
fn test_deep_menu_delete_preserves_order() {
    let state = run(
        EditorState::default(),
        &[
            Type("Starters"),
            Press(Button::AddCategory),
            Type("Mains"),
            Press(Button::AddCategory),
            Type("Desserts"),
            Press(Button::AddCategory),
            Select("Mains"),
            Type("Pasta"),
            Press(Button::AddSubcategory),
            Type("Grill"),
            Press(Button::AddSubcategory),
            Select("Pasta"),
            Type("Carbonara"),
            Press(Button::AddSubcategory),
        ],
    );
    assert_eq!(state.tree().len(), 6);

    let before = state.clone();
    let state = run(state, &[Select("Pasta"), Press(Button::DeleteNode)]);

    let outline: Vec<_> = state
        .tree()
        .iter()
        .map(|(depth, node)| (depth, node.title.as_str()))
        .collect();
    assert_eq!(
        outline,
        vec![(0, "Starters"), (0, "Mains"), (1, "Grill"), (0, "Desserts")]
    );

    // Untouched roots are shared with the earlier snapshot
    assert!(Arc::ptr_eq(&before.tree().roots()[0], &state.tree().roots()[0]));
    assert!(Arc::ptr_eq(&before.tree().roots()[2], &state.tree().roots()[2]));
    assert!(before.tree().contains(&key_of(&before, "Carbonara")));
}

#[test]
fn test_noop_actions_leave_state_identical() {
    let state = run(EditorState::default(), &[Type("Food"), Press(Button::AddCategory)]);

    for action in [
        Action::AddCategory,
        Action::AddSubcategory,
        Action::SaveEdit,
        Action::BeginEdit,
        Action::DeleteSelected,
        Action::SetDraft(String::new()),
    ] {
        let (after, outcome) = state.transition(action);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(after, state);
    }
}

#[test]
fn test_selection_invariants_hold_through_delete_of_ancestor() {
    let state = run(
        EditorState::default(),
        &[
            Type("Food"),
            Press(Button::AddCategory),
            Select("Food"),
            Type("Fruit"),
            Press(Button::AddSubcategory),
            Select("Food"),
            Press(Button::DeleteNode),
        ],
    );

    assert!(state.tree().is_empty());
    assert!(state.selected().is_none());
    assert_eq!(state.buttons(), &[Button::AddCategory]);
}
