//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, ConfirmAction, Mode};
use crate::editor::{Action, Button};

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, key);
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }

    // Mode-specific handling
    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Confirm(action) => handle_confirm_mode(app, key, action),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// Button bound to a Ctrl+letter chord.
fn button_for(c: char) -> Option<Button> {
    match c {
        'a' => Some(Button::AddCategory),
        'n' => Some(Button::AddSubcategory),
        'e' => Some(Button::EditNode),
        'd' => Some(Button::DeleteNode),
        's' => Some(Button::SaveEdit),
        _ => None,
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key.code {
            if let Some(button) = button_for(c.to_ascii_lowercase()) {
                app.press(button);
            }
        }
        return;
    }

    match key.code {
        // Tree pane selection
        KeyCode::Enter => app.toggle_select_cursor(),
        KeyCode::Esc => {
            if app.editor.selected().is_some() {
                app.clear_selection();
            }
        }

        // Navigation
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Home => app.cursor_to_top(),
        KeyCode::End => app.cursor_to_bottom(),
        KeyCode::PageUp => app.move_cursor(-20),
        KeyCode::PageDown => app.move_cursor(20),

        // Expand/Collapse
        KeyCode::Right => app.expand_cursor(),
        KeyCode::Left => app.collapse_cursor(),

        // Input field
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => app.type_char(c),

        // Help
        KeyCode::F(1) => app.mode = Mode::Help,

        _ => {}
    }
}

fn handle_confirm_mode(app: &mut App, key: KeyEvent, action: ConfirmAction) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match action {
                ConfirmAction::Delete => app.dispatch(Action::DeleteSelected),
            }
            app.mode = Mode::Normal;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}
