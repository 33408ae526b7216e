//! Integration tests for the TUI module.
//!
//! These tests exercise the TUI with simulated input, verifying correct
//! behavior without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use menu_builder::config::Config;
use menu_builder::tui::app::{ConfirmAction, Mode};
use menu_builder::tui::event::handle_key_event;
use menu_builder::tui::App;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, key(KeyCode::Char(c)));
    }
}

fn titles(app: &App) -> Vec<(usize, String)> {
    app.visible_nodes
        .iter()
        .map(|row| (row.depth, row.title.clone()))
        .collect()
}

/// Move the cursor onto the row titled `title` and select it.
fn select_row(app: &mut App, title: &str) {
    let index = app
        .visible_nodes
        .iter()
        .position(|row| row.title == title)
        .unwrap();
    app.cursor = index;
    handle_key_event(app, key(KeyCode::Enter));
}

#[test]
fn test_tui_menu_scenario() {
    let mut app = App::new(&Config::default());

    type_str(&mut app, "Food");
    handle_key_event(&mut app, ctrl('a'));
    type_str(&mut app, "Drinks");
    handle_key_event(&mut app, ctrl('a'));

    select_row(&mut app, "Food");
    type_str(&mut app, "Fruit");
    handle_key_event(&mut app, ctrl('n'));

    select_row(&mut app, "Fruit");
    handle_key_event(&mut app, ctrl('e'));
    type_str(&mut app, "Fresh Fruit");
    handle_key_event(&mut app, ctrl('s'));

    select_row(&mut app, "Drinks");
    handle_key_event(&mut app, ctrl('d'));
    assert_eq!(app.mode, Mode::Confirm(ConfirmAction::Delete));
    handle_key_event(&mut app, key(KeyCode::Char('y')));

    assert_eq!(
        titles(&app),
        vec![(0, "Food".to_string()), (1, "Fresh Fruit".to_string())]
    );
    assert!(app.editor.selected().is_none());
}

#[test]
fn test_tui_add_category_hidden_while_selected() {
    let mut app = App::new(&Config::default());
    type_str(&mut app, "Food");
    handle_key_event(&mut app, ctrl('a'));
    select_row(&mut app, "Food");

    type_str(&mut app, "Drinks");
    handle_key_event(&mut app, ctrl('a'));

    assert_eq!(app.visible_nodes.len(), 1);
    assert_eq!(app.editor.draft(), "Drinks");
}

#[test]
fn test_tui_edit_buttons_hidden_while_editing() {
    let mut app = App::new(&Config::default());
    type_str(&mut app, "Food");
    handle_key_event(&mut app, ctrl('a'));
    select_row(&mut app, "Food");
    handle_key_event(&mut app, ctrl('e'));

    // Delete and add-subcategory are not offered during an edit
    handle_key_event(&mut app, ctrl('d'));
    assert_eq!(app.mode, Mode::Normal);
    type_str(&mut app, "Fruit");
    handle_key_event(&mut app, ctrl('n'));
    assert_eq!(app.visible_nodes.len(), 1);
}

#[test]
fn test_tui_selecting_other_row_cancels_edit() {
    let mut app = App::new(&Config::default());
    type_str(&mut app, "Food");
    handle_key_event(&mut app, ctrl('a'));
    type_str(&mut app, "Drinks");
    handle_key_event(&mut app, ctrl('a'));

    select_row(&mut app, "Food");
    handle_key_event(&mut app, ctrl('e'));
    assert!(app.editor.is_editing());

    select_row(&mut app, "Drinks");
    assert!(!app.editor.is_editing());
}

#[test]
fn test_tui_new_child_visible_under_collapsed_parent() {
    let mut app = App::new(&Config::default());
    type_str(&mut app, "Food");
    handle_key_event(&mut app, ctrl('a'));
    select_row(&mut app, "Food");
    type_str(&mut app, "Fruit");
    handle_key_event(&mut app, ctrl('n'));

    app.cursor = 0;
    handle_key_event(&mut app, key(KeyCode::Left));
    assert_eq!(app.visible_nodes.len(), 1);

    type_str(&mut app, "Bread");
    handle_key_event(&mut app, ctrl('n'));
    assert_eq!(
        titles(&app),
        vec![
            (0, "Food".to_string()),
            (1, "Fruit".to_string()),
            (1, "Bread".to_string()),
        ]
    );
}

#[test]
fn test_tui_navigation() {
    let mut app = App::new(&Config::default());
    for name in ["A", "B", "C"] {
        type_str(&mut app, name);
        handle_key_event(&mut app, ctrl('a'));
    }

    assert_eq!(app.cursor, 0);
    handle_key_event(&mut app, key(KeyCode::Down));
    assert_eq!(app.cursor, 1);
    handle_key_event(&mut app, key(KeyCode::End));
    assert_eq!(app.cursor, 2);
    handle_key_event(&mut app, key(KeyCode::Up));
    assert_eq!(app.cursor, 1);
    handle_key_event(&mut app, key(KeyCode::Home));
    assert_eq!(app.cursor, 0);
}
